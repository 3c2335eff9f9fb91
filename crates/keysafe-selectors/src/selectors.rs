//! Read-only projections of a [`Snapshot`].
//!
//! Views call these on every render instead of reaching into the snapshot
//! shape. Nothing is cached; every call recomputes from its input, so the
//! same snapshot always yields the same result.
//!
//! Lookups that miss fall back per field: exchange rates read as zero,
//! identities and accounts as `None`. Only an empty account set is reported
//! as an error, see [`SelectorError::NoAccounts`].

use keysafe_model::{
    Account, AccountWithSendInfo, Address, AddressBookEntry, ConversionOptions, Decimal, Identity,
    Snapshot, Token, UnapprovedMessage, multiply_currencies,
};
use tracing::trace;

use crate::contract::{ContractResolver, HUMAN_STANDARD_TOKEN_ABI};
use crate::error::SelectorError;

/// Users with more accounts than this are candidates for the beta UI.
pub const AUTO_ADD_ACCOUNTS_THRESHOLD: usize = 2;
/// Users with more tokens than this are candidates for the beta UI.
pub const AUTO_ADD_TOKENS_THRESHOLD: usize = 1;

/// The explicitly selected address, else the first account key.
pub fn get_selected_address(snapshot: &Snapshot) -> Option<&Address> {
    let wallet = &snapshot.metamask;
    wallet.selected_address.as_ref().or_else(|| {
        trace!("no selected address, falling back to first account");
        wallet.accounts.keys().next()
    })
}

fn require_accounts(snapshot: &Snapshot) -> Result<(), SelectorError> {
    if snapshot.metamask.accounts.is_empty() {
        return Err(SelectorError::NoAccounts);
    }
    Ok(())
}

/// Identity of the selected address, if one is recorded.
///
/// # Errors
///
/// Returns [`SelectorError::NoAccounts`] when the wallet has no accounts yet.
pub fn get_selected_identity(snapshot: &Snapshot) -> Result<Option<&Identity>, SelectorError> {
    require_accounts(snapshot)?;
    Ok(get_selected_address(snapshot)
        .and_then(|address| snapshot.metamask.identities.get(address)))
}

/// Account record of the selected address.
///
/// # Errors
///
/// Returns [`SelectorError::NoAccounts`] when the wallet has no accounts yet.
pub fn get_selected_account(snapshot: &Snapshot) -> Result<Option<&Account>, SelectorError> {
    require_accounts(snapshot)?;
    Ok(get_selected_address(snapshot).and_then(|address| snapshot.metamask.accounts.get(address)))
}

/// Token matching `selectedTokenAddress`, else the send draft's token.
/// `None` means the native asset is selected.
pub fn get_selected_token(snapshot: &Snapshot) -> Option<&Token> {
    let wallet = &snapshot.metamask;
    wallet
        .selected_token_address
        .as_ref()
        .and_then(|selected| wallet.tokens.iter().find(|token| &token.address == selected))
        .or(wallet.send.token.as_ref())
}

pub fn get_selected_token_exchange_rate(snapshot: &Snapshot) -> Decimal {
    get_selected_token(snapshot).map_or_else(Decimal::zero, |token| {
        get_token_exchange_rate(snapshot, &token.address)
    })
}

pub fn get_token_exchange_rate(snapshot: &Snapshot, address: &Address) -> Decimal {
    snapshot
        .metamask
        .contract_exchange_rates
        .get(address)
        .and_then(Option::as_ref)
        .cloned()
        .unwrap_or_else(Decimal::zero)
}

pub fn conversion_rate_selector(snapshot: &Snapshot) -> Option<Decimal> {
    snapshot.metamask.conversion_rate.clone()
}

pub fn get_address_book(snapshot: &Snapshot) -> &[AddressBookEntry] {
    &snapshot.metamask.address_book
}

/// Every account merged with its identity, in account order.
pub fn accounts_with_send_ether_info_selector(snapshot: &Snapshot) -> Vec<AccountWithSendInfo> {
    let wallet = &snapshot.metamask;
    wallet
        .accounts
        .iter()
        .map(|(address, account)| {
            AccountWithSendInfo::merge(account, wallet.identities.get(address))
        })
        .collect()
}

pub fn get_current_account_with_send_ether_info(
    snapshot: &Snapshot,
) -> Option<AccountWithSendInfo> {
    let current = get_selected_address(snapshot)?;
    accounts_with_send_ether_info_selector(snapshot)
        .into_iter()
        .find(|account| account.address() == Some(current.as_str()))
}

/// Pending messages, newest first. With a token selected, only messages
/// addressed to that token's contract are kept.
pub fn transactions_selector(snapshot: &Snapshot) -> Vec<&UnapprovedMessage> {
    let wallet = &snapshot.metamask;
    let mut transactions: Vec<&UnapprovedMessage> = wallet.unapproved_msgs.values().collect();
    if let Some(token_address) = &wallet.selected_token_address {
        transactions.retain(|message| message.destination() == Some(token_address));
    }
    // Stable: equal timestamps keep their source order.
    transactions.sort_by(|a, b| b.time.cmp(&a.time));
    transactions
}

pub fn get_gas_price(snapshot: &Snapshot) -> Option<&str> {
    snapshot.metamask.send.gas_price.as_deref()
}

pub fn get_gas_limit(snapshot: &Snapshot) -> Option<&str> {
    snapshot.metamask.send.gas_limit.as_deref()
}

pub fn get_force_gas_min(snapshot: &Snapshot) -> Option<&str> {
    snapshot.metamask.send.force_gas_min.as_deref()
}

pub fn get_send_from(snapshot: &Snapshot) -> Option<&Address> {
    snapshot.metamask.send.from.as_ref()
}

pub fn get_send_amount(snapshot: &Snapshot) -> Option<&str> {
    snapshot.metamask.send.amount.as_deref()
}

pub fn get_send_max_mode_state(snapshot: &Snapshot) -> bool {
    snapshot.metamask.send.max_mode_on
}

pub fn get_current_currency(snapshot: &Snapshot) -> Option<&str> {
    snapshot.metamask.current_currency.as_deref()
}

/// Fiat value of one unit of the selected token, as an exact decimal string.
///
/// An unknown conversion rate counts as zero, like a missing exchange rate.
pub fn get_selected_token_to_fiat_rate(snapshot: &Snapshot) -> String {
    let token_rate = get_selected_token_exchange_rate(snapshot);
    let conversion_rate = conversion_rate_selector(snapshot).unwrap_or_else(Decimal::zero);
    multiply_currencies(&conversion_rate, &token_rate, &ConversionOptions::decimal())
}

pub fn get_selected_token_contract<R: ContractResolver>(
    snapshot: &Snapshot,
    resolver: &R,
) -> Option<R::Handle> {
    let token = get_selected_token(snapshot)?;
    resolver.resolve_contract(HUMAN_STANDARD_TOKEN_ABI, &token.address)
}

pub fn auto_add_to_beta_ui(snapshot: &Snapshot) -> bool {
    let wallet = &snapshot.metamask;
    let passes_threshold = wallet.accounts.len() > AUTO_ADD_ACCOUNTS_THRESHOLD
        && wallet.tokens.len() > AUTO_ADD_TOKENS_THRESHOLD;
    !wallet.feature_flags.beta_ui && passes_threshold
}

pub fn get_current_view_context(snapshot: &Snapshot) -> Option<&str> {
    snapshot
        .app_state
        .current_view
        .as_ref()
        .and_then(|view| view.context.as_deref())
}

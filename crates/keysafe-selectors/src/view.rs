//! Data behind the wallet panel: who is selected, which keyring holds the
//! key, and what the balance and selected token are worth.

use keysafe_model::{Address, ConversionOptions, Decimal, Snapshot, Token, multiply_currencies};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SelectorError;
use crate::keyring::{find_owning_keyring, is_imported};
use crate::selectors::{
    auto_add_to_beta_ui, conversion_rate_selector, get_current_currency, get_selected_account,
    get_selected_address, get_selected_identity, get_selected_token,
    get_selected_token_exchange_rate, get_selected_token_to_fiat_rate,
};

/// Fractional digits shown for fiat amounts.
pub const FIAT_DISPLAY_DECIMALS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub address: Address,
    pub name: Option<String>,
    pub keyring_type: String,
    /// Key was imported rather than created in this vault.
    pub imported: bool,
    pub balance_ether: Option<Decimal>,
    /// Balance in the current currency, rounded for display.
    pub balance_fiat: Option<String>,
    pub selected_token: Option<Token>,
    pub token_exchange_rate: Decimal,
    pub token_to_fiat_rate: String,
    pub current_currency: Option<String>,
    pub beta_ui_eligible: bool,
}

/// Reads a hex wei balance as ether. Unreadable balances are logged and
/// shown as unknown.
pub fn balance_in_ether(balance: Option<&str>) -> Option<Decimal> {
    let balance = balance?;
    match Decimal::from_wei_hex(balance) {
        Ok(ether) => Some(ether),
        Err(error) => {
            warn!(%error, "unreadable account balance");
            None
        }
    }
}

/// # Errors
///
/// Fails with [`SelectorError::NoAccounts`] on an empty wallet, and with the
/// keyring errors of [`find_owning_keyring`].
pub fn wallet_view(snapshot: &Snapshot) -> Result<WalletView, SelectorError> {
    let identity = get_selected_identity(snapshot)?;
    let account = get_selected_account(snapshot)?;
    let address = get_selected_address(snapshot)
        .ok_or(SelectorError::NoAccounts)?
        .clone();
    let keyring = find_owning_keyring(snapshot)?;

    if identity.is_none() {
        debug!("selected address has no identity");
    }

    let balance_ether = balance_in_ether(account.and_then(|account| account.balance.as_deref()));
    let balance_fiat = balance_ether
        .as_ref()
        .zip(conversion_rate_selector(snapshot))
        .map(|(ether, rate)| {
            let options = ConversionOptions::decimal().with_decimals(FIAT_DISPLAY_DECIMALS);
            multiply_currencies(ether, &rate, &options)
        });

    Ok(WalletView {
        name: identity.and_then(|identity| identity.name.clone()),
        keyring_type: keyring.kind.clone(),
        imported: is_imported(keyring),
        balance_ether,
        balance_fiat,
        selected_token: get_selected_token(snapshot).cloned(),
        token_exchange_rate: get_selected_token_exchange_rate(snapshot),
        token_to_fiat_rate: get_selected_token_to_fiat_rate(snapshot),
        current_currency: get_current_currency(snapshot).map(str::to_string),
        beta_ui_eligible: auto_add_to_beta_ui(snapshot),
        address,
    })
}

//! Serializable reports assembled from selector output.

use chrono::{DateTime, Utc};
use keysafe_model::{AccountWithSendInfo, Decimal, Snapshot};
use keysafe_selectors::{
    SelectorError, WalletView, accounts_with_send_ether_info_selector, balance_in_ether,
    get_current_account_with_send_ether_info, get_current_view_context, get_force_gas_min,
    get_gas_limit, get_gas_price, get_selected_address, get_send_amount, get_send_from,
    get_send_max_mode_state, transactions_selector, wallet_view,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRow {
    pub address: String,
    pub name: Option<String>,
    pub balance_ether: Option<Decimal>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub id: String,
    pub time: u64,
    pub created: Option<String>,
    pub to: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendDraft {
    pub from: Option<String>,
    pub amount: Option<String>,
    pub gas_price: Option<String>,
    pub gas_limit: Option<String>,
    pub force_gas_min: Option<String>,
    pub max_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub wallet: WalletView,
    pub current_account: Option<AccountWithSendInfo>,
    pub network: Option<String>,
    pub account_count: usize,
    /// Pending messages visible for the selected asset.
    pub pending_count: usize,
    pub view_context: Option<String>,
    pub send: Option<SendDraft>,
}

/// One row per account, in account order.
pub fn account_rows(snapshot: &Snapshot) -> Vec<AccountRow> {
    let selected = get_selected_address(snapshot);
    snapshot
        .metamask
        .accounts
        .keys()
        .zip(accounts_with_send_ether_info_selector(snapshot))
        .map(|(key, account)| AccountRow {
            address: account.address().unwrap_or(key.as_str()).to_string(),
            name: account.name().map(str::to_string),
            balance_ether: balance_in_ether(account.balance()),
            selected: selected == Some(key),
        })
        .collect()
}

fn format_time(millis: u64) -> Option<String> {
    let millis = i64::try_from(millis).ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis).map(|time| time.to_rfc3339())
}

/// Pending messages as shown in the activity list.
pub fn transaction_rows(snapshot: &Snapshot) -> Vec<TransactionRow> {
    transactions_selector(snapshot)
        .into_iter()
        .map(|message| TransactionRow {
            id: match &message.id {
                Some(serde_json::Value::String(id)) => id.clone(),
                Some(id) => id.to_string(),
                None => "-".to_string(),
            },
            time: message.time,
            created: format_time(message.time),
            to: message.destination().map(ToString::to_string),
            status: message.status.clone(),
        })
        .collect()
}

fn send_draft(snapshot: &Snapshot) -> Option<SendDraft> {
    let draft = SendDraft {
        from: get_send_from(snapshot).map(ToString::to_string),
        amount: get_send_amount(snapshot).map(str::to_string),
        gas_price: get_gas_price(snapshot).map(str::to_string),
        gas_limit: get_gas_limit(snapshot).map(str::to_string),
        force_gas_min: get_force_gas_min(snapshot).map(str::to_string),
        max_mode: get_send_max_mode_state(snapshot),
    };
    let empty = draft.from.is_none()
        && draft.amount.is_none()
        && draft.gas_price.is_none()
        && draft.gas_limit.is_none()
        && draft.force_gas_min.is_none()
        && !draft.max_mode;
    (!empty).then_some(draft)
}

pub fn summary_report(snapshot: &Snapshot) -> Result<SummaryReport, SelectorError> {
    Ok(SummaryReport {
        wallet: wallet_view(snapshot)?,
        current_account: get_current_account_with_send_ether_info(snapshot),
        network: snapshot.metamask.network.clone(),
        account_count: snapshot.metamask.accounts.len(),
        pending_count: transactions_selector(snapshot).len(),
        view_context: get_current_view_context(snapshot).map(str::to_string),
        send: send_draft(snapshot),
    })
}

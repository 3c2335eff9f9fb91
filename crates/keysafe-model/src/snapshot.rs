//! The full state tree handed to selectors.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::account::{Account, Identity};
use crate::decimal::Decimal;
use crate::error::{ModelError, Result};
use crate::ids::{Address, blank_as_none};
use crate::wallet::{AddressBookEntry, FeatureFlags, Keyring, SendState, Token, UnapprovedMessage};

/// One immutable view of the application store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub metamask: WalletState,
    pub app_state: AppState,
}

/// State mirrored from the background key-management process.
///
/// `accounts` and `unapproved_msgs` keep the key order of the source
/// document; selectors that pick "the first" entry depend on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletState {
    #[serde(deserialize_with = "blank_as_none")]
    pub selected_address: Option<Address>,
    pub accounts: IndexMap<Address, Account>,
    pub identities: IndexMap<Address, Identity>,
    pub tokens: Vec<Token>,
    #[serde(deserialize_with = "blank_as_none")]
    pub selected_token_address: Option<Address>,
    /// A `null` rate reads the same as an absent one.
    pub contract_exchange_rates: IndexMap<Address, Option<Decimal>>,
    pub conversion_rate: Option<Decimal>,
    pub current_currency: Option<String>,
    pub address_book: Vec<AddressBookEntry>,
    pub send: SendState,
    pub unapproved_msgs: IndexMap<String, UnapprovedMessage>,
    pub keyrings: Vec<Keyring>,
    pub feature_flags: FeatureFlags,
    pub network: Option<String>,
}

/// Transient UI state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    pub current_view: Option<CurrentView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentView {
    pub name: Option<String>,
    pub context: Option<String>,
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a snapshot previously dumped from the store as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ModelError::io(path, source))?;
        serde_json::from_str(&contents).map_err(|source| ModelError::json(path, source))
    }
}

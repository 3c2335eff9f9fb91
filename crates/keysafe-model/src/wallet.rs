//! Records held in the wallet sub-tree of a snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{Address, blank_as_none};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub decimals: u8,
}

/// A signing/storage mechanism and the addresses it governs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyring {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub accounts: Vec<Address>,
}

impl Keyring {
    pub fn governs(&self, address: &Address) -> bool {
        self.accounts.contains(address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookEntry {
    pub address: Address,
    #[serde(default)]
    pub name: String,
}

/// Draft of an outgoing transaction while the send flow is open.
///
/// Quantities are the hex strings the send form stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SendState {
    #[serde(deserialize_with = "blank_as_none")]
    pub from: Option<Address>,
    pub amount: Option<String>,
    pub gas_price: Option<String>,
    pub gas_limit: Option<String>,
    pub force_gas_min: Option<String>,
    pub max_mode_on: bool,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxParams {
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<Address>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<Address>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A request waiting for the user's signature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnapprovedMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Creation timestamp in milliseconds.
    #[serde(default)]
    pub time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_params: Option<TxParams>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UnapprovedMessage {
    pub fn destination(&self) -> Option<&Address> {
        self.tx_params.as_ref().and_then(|params| params.to.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default, rename = "betaUI")]
    pub beta_ui: bool,
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{Address, blank_as_none};

/// Balance and metadata the background process tracks for one address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<Address>,
    /// Hex-encoded wei quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display identity (label) for one address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Account {
    fn fields(&self) -> Map<String, Value> {
        let mut fields = self.extra.clone();
        if let Some(address) = &self.address {
            fields.insert("address".to_string(), Value::String(address.to_string()));
        }
        if let Some(balance) = &self.balance {
            fields.insert("balance".to_string(), Value::String(balance.clone()));
        }
        fields
    }
}

impl Identity {
    fn fields(&self) -> Map<String, Value> {
        let mut fields = self.extra.clone();
        if let Some(address) = &self.address {
            fields.insert("address".to_string(), Value::String(address.to_string()));
        }
        if let Some(name) = &self.name {
            fields.insert("name".to_string(), Value::String(name.clone()));
        }
        fields
    }
}

/// An account record with its identity laid over it, as offered in the
/// send flow's account picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountWithSendInfo(Map<String, Value>);

impl AccountWithSendInfo {
    /// Combines both records field by field; on a key present in both, the
    /// identity's value wins.
    pub fn merge(account: &Account, identity: Option<&Identity>) -> Self {
        let mut fields = account.fields();
        if let Some(identity) = identity {
            fields.extend(identity.fields());
        }
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn address(&self) -> Option<&str> {
        self.get_str("address")
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn balance(&self) -> Option<&str> {
        self.get_str("balance")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_fields_override_account_fields() {
        let account: Account =
            serde_json::from_str(r#"{"address":"0xa","balance":"0xa","nonce":"0x1"}"#).unwrap();
        let identity: Identity =
            serde_json::from_str(r#"{"address":"0xa","name":"Alice","balance":"0x0"}"#).unwrap();

        let merged = AccountWithSendInfo::merge(&account, Some(&identity));

        assert_eq!(merged.balance(), Some("0x0"));
        assert_eq!(merged.name(), Some("Alice"));
        assert_eq!(merged.address(), Some("0xa"));
        assert_eq!(merged.get("nonce"), Some(&Value::String("0x1".into())));
    }

    #[test]
    fn missing_identity_keeps_account_as_is() {
        let account: Account = serde_json::from_str(r#"{"balance":"0x5"}"#).unwrap();
        let merged = AccountWithSendInfo::merge(&account, None);
        assert_eq!(merged.balance(), Some("0x5"));
        assert_eq!(merged.name(), None);
        assert_eq!(merged.address(), None);
    }
}

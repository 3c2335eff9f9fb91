use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ModelError;

/// Account, token or contract address as it appears in the wallet state.
///
/// Comparison is exact: the background process is expected to hand out
/// addresses in one canonical casing, and lookups never normalize.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidAddress(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// Reads an optional address field, treating a blank string as unset.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|value| Address::new(value).ok()))
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        let address = Address::new("  0xabc ").unwrap();
        assert_eq!(address.as_str(), "0xabc");
        assert!(matches!(
            Address::new("   "),
            Err(ModelError::InvalidAddress(_))
        ));
    }

    #[test]
    fn deserializes_as_plain_string() {
        let address: Address = serde_json::from_str("\"0xdef\"").unwrap();
        assert_eq!(address.to_string(), "0xdef");
        assert_eq!(serde_json::to_string(&address).unwrap(), "\"0xdef\"");
    }

    #[test]
    fn deserialization_trims_and_rejects_blank() {
        let address: Address = serde_json::from_str("\" 0xdef \"").unwrap();
        assert_eq!(address.as_str(), "0xdef");
        assert!(serde_json::from_str::<Address>("\"   \"").is_err());
    }
}

use keysafe_model::Address;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The wallet has not been set up; views show onboarding instead.
    #[error("no accounts configured yet")]
    NoAccounts,

    #[error("no keyring governs address {address}")]
    NoOwningKeyring { address: Address },

    #[error("{count} keyrings claim address {address}")]
    AmbiguousKeyring { address: Address, count: usize },
}

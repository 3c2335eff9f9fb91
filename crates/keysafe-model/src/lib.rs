#![deny(unsafe_code)]

pub mod account;
pub mod conversion;
pub mod decimal;
pub mod error;
pub mod ids;
pub mod snapshot;
pub mod wallet;

pub use account::{Account, AccountWithSendInfo, Identity};
pub use conversion::{ConversionOptions, multiply, multiply_currencies};
pub use decimal::{Decimal, DecimalError};
pub use error::{ModelError, Result};
pub use ids::Address;
pub use snapshot::{AppState, CurrentView, Snapshot, WalletState};
pub use wallet::{
    AddressBookEntry, FeatureFlags, Keyring, SendState, Token, TxParams, UnapprovedMessage,
};

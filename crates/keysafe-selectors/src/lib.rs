#![deny(unsafe_code)]

pub mod contract;
pub mod error;
pub mod keyring;
pub mod selectors;
pub mod view;

pub use contract::{ContractResolver, HUMAN_STANDARD_TOKEN_ABI};
pub use error::SelectorError;
pub use keyring::{PRIMARY_KEYRING_TYPE, find_owning_keyring, is_imported};
pub use selectors::{
    AUTO_ADD_ACCOUNTS_THRESHOLD, AUTO_ADD_TOKENS_THRESHOLD, accounts_with_send_ether_info_selector,
    auto_add_to_beta_ui, conversion_rate_selector, get_address_book,
    get_current_account_with_send_ether_info, get_current_currency, get_current_view_context,
    get_force_gas_min, get_gas_limit, get_gas_price, get_selected_account, get_selected_address,
    get_selected_identity, get_selected_token, get_selected_token_contract,
    get_selected_token_exchange_rate, get_selected_token_to_fiat_rate, get_send_amount,
    get_send_from, get_send_max_mode_state, get_token_exchange_rate, transactions_selector,
};
pub use view::{FIAT_DISPLAY_DECIMALS, WalletView, balance_in_ether, wallet_view};

//! Tests for the wallet panel projection.

use keysafe_model::Snapshot;
use keysafe_selectors::{SelectorError, balance_in_ether, wallet_view};
use serde_json::json;

fn snapshot(value: serde_json::Value) -> Snapshot {
    serde_json::from_value(value).expect("fixture snapshot")
}

#[test]
fn wallet_view_snapshot_is_stable() {
    let snapshot = snapshot(json!({
        "metamask": {
            "selectedAddress": "0xb0",
            "accounts": {
                "0xa0": { "address": "0xa0", "balance": "0x0" },
                "0xb0": { "address": "0xb0", "balance": "0xde0b6b3a7640000" }
            },
            "identities": {
                "0xb0": { "address": "0xb0", "name": "Account 2" }
            },
            "tokens": [{ "address": "0x70", "symbol": "IXO", "decimals": 8 }],
            "selectedTokenAddress": "0x70",
            "contractExchangeRates": { "0x70": 0.00318 },
            "conversionRate": 612.45,
            "currentCurrency": "usd",
            "keyrings": [{ "type": "sovrin", "accounts": ["0xa0", "0xb0"] }]
        }
    }));

    let view = wallet_view(&snapshot).expect("wallet view");

    insta::assert_json_snapshot!(view, @r#"
    {
      "address": "0xb0",
      "name": "Account 2",
      "keyringType": "sovrin",
      "imported": false,
      "balanceEther": "1",
      "balanceFiat": "612.45",
      "selectedToken": {
        "address": "0x70",
        "symbol": "IXO",
        "decimals": 8
      },
      "tokenExchangeRate": "0.00318",
      "tokenToFiatRate": "1.947591",
      "currentCurrency": "usd",
      "betaUiEligible": false
    }
    "#);
}

#[test]
fn imported_key_without_identity() {
    let snapshot = snapshot(json!({
        "metamask": {
            "accounts": { "0xa0": { "balance": "not-hex" } },
            "keyrings": [{ "type": "Simple Key Pair", "accounts": ["0xa0"] }]
        }
    }));

    let view = wallet_view(&snapshot).expect("wallet view");

    assert_eq!(view.address.as_str(), "0xa0");
    assert!(view.imported);
    assert_eq!(view.name, None);
    assert_eq!(view.balance_ether, None);
    assert_eq!(view.balance_fiat, None);
    assert_eq!(view.token_to_fiat_rate, "0");
    assert_eq!(view.selected_token, None);
    assert!(view.token_exchange_rate.is_zero());
}

#[test]
fn wallet_view_requires_accounts() {
    let snapshot = snapshot(json!({ "metamask": {} }));
    assert_eq!(wallet_view(&snapshot), Err(SelectorError::NoAccounts));
}

#[test]
fn balance_fiat_is_rounded_for_display() {
    let snapshot = snapshot(json!({
        "metamask": {
            "accounts": { "0xa0": { "balance": "0x6f05b59d3b20000" } },
            "conversionRate": "612.45",
            "keyrings": [{ "type": "sovrin", "accounts": ["0xa0"] }]
        }
    }));

    let view = wallet_view(&snapshot).expect("wallet view");

    assert_eq!(view.balance_ether.map(|ether| ether.to_string()).as_deref(), Some("0.5"));
    assert_eq!(view.balance_fiat.as_deref(), Some("306.23"));
}

#[test]
fn balance_helper_reads_wei_and_rejects_garbage() {
    assert_eq!(
        balance_in_ether(Some("0xde0b6b3a7640000")).map(|ether| ether.to_string()).as_deref(),
        Some("1")
    );
    assert_eq!(balance_in_ether(Some("not-hex")), None);
    assert_eq!(balance_in_ether(None), None);
}

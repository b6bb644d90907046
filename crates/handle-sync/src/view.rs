//! Connected and not-connected wallet view models
//!
//! Derived rows for connection lists, recomputed on demand from the
//! connected-wallet map and never persisted. Callers pass only
//! non-registry wallets.

use crate::sync::ConnectedWalletMap;
use handle_registry::WalletDescriptor;
use std::collections::BTreeMap;

/// Row describing one wallet asset in a connection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletListItem {
    /// Row key, `walletId-currencyCode`
    pub key: String,
    /// Owning wallet id
    pub wallet_id: String,
    /// Wallet display name
    pub name: String,
    /// Receive address shown for connecting
    pub public_address: String,
    /// Asset currency code
    pub currency_code: String,
    /// Parent chain code
    pub chain_code: String,
    /// Full asset code, `chain:token`
    pub full_currency_code: String,
    /// Icon reference; empty when the token is unknown to the wallet
    pub symbol_image: String,
}

fn item(wallet: &WalletDescriptor, currency_code: &str, symbol_image: &str) -> WalletListItem {
    WalletListItem {
        key: format!("{}-{}", wallet.id, currency_code),
        wallet_id: wallet.id.clone(),
        name: wallet.name.clone(),
        public_address: wallet.receive_address.clone(),
        currency_code: currency_code.to_string(),
        chain_code: wallet.chain_code.clone(),
        full_currency_code: format!("{}:{}", wallet.chain_code, currency_code),
        symbol_image: symbol_image.to_string(),
    }
}

fn token_image<'a>(wallet: &'a WalletDescriptor, currency_code: &'a str) -> &'a str {
    wallet
        .token_meta(currency_code)
        .map(|meta| meta.symbol_image.as_str())
        .unwrap_or("")
}

/// Wallet assets not currently bound to the handle.
pub fn not_connected_wallets(
    wallets: &[WalletDescriptor],
    connected: &ConnectedWalletMap,
) -> BTreeMap<String, WalletListItem> {
    let mut rows = BTreeMap::new();
    for wallet in wallets {
        let native_code = format!("{}:{}", wallet.chain_code, wallet.chain_code);
        if !connected.contains_key(&native_code) {
            let row = item(wallet, &wallet.chain_code, &wallet.symbol_image);
            rows.insert(row.key.clone(), row);
        }
        for token in &wallet.enabled_tokens {
            if token == &wallet.chain_code {
                continue;
            }
            let full_code = format!("{}:{}", wallet.chain_code, token);
            if !connected.contains_key(&full_code) {
                let row = item(wallet, token, token_image(wallet, token));
                rows.insert(row.key.clone(), row);
            }
        }
    }
    rows
}

/// Wallet assets bound to the handle, restricted to the owning wallet.
pub fn connected_wallets(
    wallets: &[WalletDescriptor],
    connected: &ConnectedWalletMap,
) -> BTreeMap<String, WalletListItem> {
    let mut rows = BTreeMap::new();
    for wallet in wallets {
        let native_code = format!("{}:{}", wallet.chain_code, wallet.chain_code);
        if connected.get(&native_code) == Some(&wallet.id) {
            let row = item(wallet, &wallet.chain_code, &wallet.symbol_image);
            rows.insert(row.key.clone(), row);
        }
        for token in &wallet.enabled_tokens {
            if token == &wallet.chain_code {
                continue;
            }
            let full_code = format!("{}:{}", wallet.chain_code, token);
            if connected.get(&full_code) == Some(&wallet.id) {
                let row = item(wallet, token, token_image(wallet, token));
                rows.insert(row.key.clone(), row);
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use handle_registry::TokenMeta;

    fn wallet(id: &str, chain: &str, tokens: &[&str]) -> WalletDescriptor {
        WalletDescriptor {
            id: id.to_string(),
            name: format!("{} wallet", chain),
            chain_code: chain.to_string(),
            receive_address: format!("{}-addr", id),
            enabled_tokens: tokens.iter().map(|t| t.to_string()).collect(),
            tokens: vec![TokenMeta {
                currency_code: "USDT".to_string(),
                symbol_image: "usdt.png".to_string(),
            }],
            symbol_image: format!("{}.png", chain),
        }
    }

    #[test]
    fn test_empty_map_lists_every_enabled_asset() {
        let wallets = vec![wallet("w1", "BTC", &[]), wallet("w2", "ETH", &["USDT", "DAI"])];
        let rows = not_connected_wallets(&wallets, &ConnectedWalletMap::new());

        assert_eq!(rows.len(), 4);
        assert!(rows.contains_key("w1-BTC"));
        assert!(rows.contains_key("w2-ETH"));
        assert!(rows.contains_key("w2-USDT"));
        assert!(rows.contains_key("w2-DAI"));

        assert!(connected_wallets(&wallets, &ConnectedWalletMap::new()).is_empty());
    }

    #[test]
    fn test_connected_rows_belong_to_owning_wallet() {
        let wallets = vec![wallet("w1", "ETH", &["USDT"]), wallet("w2", "ETH", &["USDT"])];
        let mut map = ConnectedWalletMap::new();
        map.insert("ETH:ETH".to_string(), "w1".to_string());
        map.insert("ETH:USDT".to_string(), "w2".to_string());

        let rows = connected_wallets(&wallets, &map);
        assert_eq!(rows.len(), 2);
        assert!(rows.contains_key("w1-ETH"));
        assert!(rows.contains_key("w2-USDT"));

        let not = not_connected_wallets(&wallets, &map);
        // w1's USDT and w2's native ETH remain unconnected rows.
        assert_eq!(not.len(), 2);
        assert!(not.contains_key("w1-USDT"));
        assert!(not.contains_key("w2-ETH"));
    }

    #[test]
    fn test_row_fields_and_token_image_fallback() {
        let wallets = vec![wallet("w1", "ETH", &["USDT", "DAI"])];
        let rows = not_connected_wallets(&wallets, &ConnectedWalletMap::new());

        let native = &rows["w1-ETH"];
        assert_eq!(native.full_currency_code, "ETH:ETH");
        assert_eq!(native.symbol_image, "ETH.png");
        assert_eq!(native.public_address, "w1-addr");

        let known_token = &rows["w1-USDT"];
        assert_eq!(known_token.symbol_image, "usdt.png");
        assert_eq!(known_token.chain_code, "ETH");
        assert_eq!(known_token.full_currency_code, "ETH:USDT");

        // No metadata for DAI: image degrades to empty.
        let unknown_token = &rows["w1-DAI"];
        assert_eq!(unknown_token.symbol_image, "");
    }
}

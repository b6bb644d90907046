//! Asset and wallet data model

/// Asset identifier: a chain code plus a token code.
///
/// `token_code == chain_code` denotes the chain's native asset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetCode {
    /// Parent chain code
    pub chain_code: String,
    /// Token code on that chain
    pub token_code: String,
}

impl AssetCode {
    /// Asset on `chain_code` identified by `token_code`.
    pub fn new(chain_code: &str, token_code: &str) -> Self {
        Self {
            chain_code: chain_code.to_string(),
            token_code: token_code.to_string(),
        }
    }

    /// The chain's native asset.
    pub fn native(chain_code: &str) -> Self {
        Self::new(chain_code, chain_code)
    }

    /// Whether this is the chain's native asset.
    pub fn is_native(&self) -> bool {
        self.chain_code == self.token_code
    }

    /// Full asset code in `chain:token` form.
    pub fn full_code(&self) -> String {
        format!("{}:{}", self.chain_code, self.token_code)
    }
}

/// Token metadata known to a wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMeta {
    /// Token currency code
    pub currency_code: String,
    /// Icon reference for the token
    pub symbol_image: String,
}

/// Local representation of one wallet in the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletDescriptor {
    /// Opaque unique wallet id
    pub id: String,
    /// Display name
    pub name: String,
    /// Chain the wallet lives on
    pub chain_code: String,
    /// Current receive address
    pub receive_address: String,
    /// Token codes the user has enabled
    pub enabled_tokens: Vec<String>,
    /// Metadata for tokens the wallet knows about
    pub tokens: Vec<TokenMeta>,
    /// Icon reference for the wallet's native asset
    pub symbol_image: String,
}

impl WalletDescriptor {
    /// Enabled assets: every enabled token plus the native chain asset.
    ///
    /// Every wallet is implicitly enabled for its own native asset, whether
    /// or not `enabled_tokens` lists it.
    pub fn enabled_assets(&self) -> Vec<AssetCode> {
        let mut assets: Vec<AssetCode> = self
            .enabled_tokens
            .iter()
            .map(|token| AssetCode::new(&self.chain_code, token))
            .collect();
        if !self.enabled_tokens.iter().any(|t| t == &self.chain_code) {
            assets.push(AssetCode::native(&self.chain_code));
        }
        assets
    }

    /// Metadata for one enabled token, if the wallet knows it.
    pub fn token_meta(&self, currency_code: &str) -> Option<&TokenMeta> {
        self.tokens.iter().find(|t| t.currency_code == currency_code)
    }
}

/// A desired handle-to-address binding for one wallet asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Wallet that controls the address
    pub wallet_id: String,
    /// Asset being bound
    pub asset: AssetCode,
    /// Public address to record in the registry
    pub public_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(chain: &str, tokens: &[&str]) -> WalletDescriptor {
        WalletDescriptor {
            id: "w1".to_string(),
            name: "My Wallet".to_string(),
            chain_code: chain.to_string(),
            receive_address: "addr1".to_string(),
            enabled_tokens: tokens.iter().map(|t| t.to_string()).collect(),
            tokens: Vec::new(),
            symbol_image: String::new(),
        }
    }

    #[test]
    fn test_full_code() {
        assert_eq!(AssetCode::new("ETH", "USDT").full_code(), "ETH:USDT");
        assert!(AssetCode::native("BTC").is_native());
        assert!(!AssetCode::new("ETH", "USDT").is_native());
    }

    #[test]
    fn test_enabled_assets_adds_native() {
        let assets = wallet("ETH", &["USDT"]).enabled_assets();
        assert_eq!(
            assets,
            vec![AssetCode::new("ETH", "USDT"), AssetCode::native("ETH")]
        );
    }

    #[test]
    fn test_enabled_assets_native_not_duplicated() {
        let assets = wallet("ETH", &["USDT", "ETH"]).enabled_assets();
        let native_count = assets.iter().filter(|a| a.is_native()).count();
        assert_eq!(native_count, 1);
        assert_eq!(assets.len(), 2);
    }

    #[test]
    fn test_enabled_assets_no_tokens() {
        let assets = wallet("BTC", &[]).enabled_assets();
        assert_eq!(assets, vec![AssetCode::native("BTC")]);
    }
}

//! Per-asset connection check
//!
//! Registry truth decides whether a wallet is bound; the cache only
//! confirms a match when the wallet's receive address has rotated since
//! bind time.

use crate::cache::PerAssetBindings;
use handle_registry::{AssetCode, Handle, RegistryClient, Resolution, WalletDescriptor};
use tracing::debug;

/// Whether `wallet` is currently bound to `handle` for `asset`.
///
/// An unbound resolution short-circuits to false regardless of what the
/// cache claims. Lookup failures are swallowed and read as not connected so
/// one bad resolution cannot abort a whole refresh.
pub async fn is_wallet_connected(
    client: &RegistryClient,
    handle: &Handle,
    wallet: &WalletDescriptor,
    asset: &AssetCode,
    cached: &PerAssetBindings,
) -> bool {
    let resolved = match client
        .resolve_address(handle, &asset.chain_code, &asset.token_code)
        .await
    {
        Ok(Resolution::Bound(address)) => address,
        Ok(Resolution::Unbound) => return false,
        Err(e) => {
            debug!(
                handle = handle.as_str(),
                asset = %asset.full_code(),
                "resolution failed: {}",
                e
            );
            return false;
        }
    };

    if resolved == wallet.receive_address {
        return true;
    }

    // The wallet's receive address may have rotated since bind time; the
    // cache entry confirms the registry's address is still ours.
    if let Some(entry) = cached.get(&asset.full_code()) {
        if entry.wallet_id == wallet.id && entry.public_address == resolved {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachedBinding;
    use handle_registry::testing::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn wallet() -> WalletDescriptor {
        WalletDescriptor {
            id: "w1".to_string(),
            name: "Bitcoin".to_string(),
            chain_code: "BTC".to_string(),
            receive_address: "current-addr".to_string(),
            enabled_tokens: Vec::new(),
            tokens: Vec::new(),
            symbol_image: String::new(),
        }
    }

    fn client_resolving(address: &str) -> RegistryClient {
        let transport = Arc::new(ScriptedTransport::new());
        let address = address.to_string();
        transport.on("get_public_address", move |_| {
            Ok(json!({ "public_address": address }))
        });
        RegistryClient::new(transport)
    }

    fn cached(wallet_id: &str, address: &str) -> PerAssetBindings {
        let mut bindings = PerAssetBindings::new();
        bindings.insert(
            "BTC:BTC".to_string(),
            CachedBinding {
                wallet_id: wallet_id.to_string(),
                public_address: address.to_string(),
            },
        );
        bindings
    }

    fn handle() -> Handle {
        Handle::parse("alice@wallet").unwrap()
    }

    #[tokio::test]
    async fn test_receive_address_match_is_connected() {
        let client = client_resolving("current-addr");
        let connected = is_wallet_connected(
            &client,
            &handle(),
            &wallet(),
            &AssetCode::native("BTC"),
            &PerAssetBindings::new(),
        )
        .await;
        assert!(connected);
    }

    #[tokio::test]
    async fn test_unbound_wins_over_stale_cache() {
        let client = client_resolving("0");
        // Cache claims this wallet is bound; the registry says unbound.
        let connected = is_wallet_connected(
            &client,
            &handle(),
            &wallet(),
            &AssetCode::native("BTC"),
            &cached("w1", "current-addr"),
        )
        .await;
        assert!(!connected);
    }

    #[tokio::test]
    async fn test_cache_rescues_rotated_address() {
        // Registry still holds the address that was current at bind time.
        let client = client_resolving("old-addr");
        let connected = is_wallet_connected(
            &client,
            &handle(),
            &wallet(),
            &AssetCode::native("BTC"),
            &cached("w1", "old-addr"),
        )
        .await;
        assert!(connected);
    }

    #[tokio::test]
    async fn test_cache_wallet_mismatch_not_connected() {
        let client = client_resolving("old-addr");
        let connected = is_wallet_connected(
            &client,
            &handle(),
            &wallet(),
            &AssetCode::native("BTC"),
            &cached("other-wallet", "old-addr"),
        )
        .await;
        assert!(!connected);
    }

    #[tokio::test]
    async fn test_cache_address_mismatch_not_connected() {
        let client = client_resolving("somebody-elses-addr");
        let connected = is_wallet_connected(
            &client,
            &handle(),
            &wallet(),
            &AssetCode::native("BTC"),
            &cached("w1", "old-addr"),
        )
        .await;
        assert!(!connected);
    }

    #[tokio::test]
    async fn test_lookup_error_is_not_connected() {
        // No handler programmed: every resolution fails.
        let client = RegistryClient::new(Arc::new(ScriptedTransport::new()));
        let connected = is_wallet_connected(
            &client,
            &handle(),
            &wallet(),
            &AssetCode::native("BTC"),
            &cached("w1", "current-addr"),
        )
        .await;
        assert!(!connected);
    }
}

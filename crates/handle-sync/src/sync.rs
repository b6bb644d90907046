//! Full refresh of a handle's connected wallets

use crate::cache;
use crate::resolver::is_wallet_connected;
use crate::store::DurableStore;
use handle_registry::{Handle, RegistryClient, WalletDescriptor};
use std::collections::BTreeMap;
use tracing::debug;

/// Connected wallet map: full asset code to owning wallet id.
///
/// At most one wallet per asset for a given handle; the registry keeps a
/// single address per asset, so this holds by construction.
pub type ConnectedWalletMap = BTreeMap<String, String>;

/// Recompute which wallets are bound to `handle`.
///
/// Walks every wallet's enabled assets and resolves each against the
/// registry, skipping an asset once any wallet is found bound to it. The
/// cache snapshot for the handle is loaded once up front and used only as
/// the resolver's secondary confirmation signal. Runs as an explicit
/// user-triggered refresh, so the fan-out is sequential.
pub async fn refresh_connected_wallets(
    client: &RegistryClient,
    store: &dyn DurableStore,
    handle: &Handle,
    wallets: &[WalletDescriptor],
) -> ConnectedWalletMap {
    let cached = cache::for_handle(store, handle).await;
    let mut connected = ConnectedWalletMap::new();

    for wallet in wallets {
        for asset in wallet.enabled_assets() {
            let full_code = asset.full_code();
            if connected.contains_key(&full_code) {
                continue;
            }
            if is_wallet_connected(client, handle, wallet, &asset, &cached).await {
                connected.insert(full_code, wallet.id.clone());
            }
        }
    }

    debug!(
        handle = handle.as_str(),
        connected = connected.len(),
        "refreshed connected wallets"
    );
    connected
}

//! Durable mirror of handle-to-address bindings
//!
//! One `ConnectedWallets.json` per registry wallet's store, covering every
//! handle that wallet owns. An entry means a registry write succeeded at
//! some point; the registry stays the source of truth for whether the
//! binding is still live. Reads fail soft and write failures are surfaced
//! as `Result` so callers can log and move on.

use crate::store::DurableStore;
use crate::{Error, Result};
use handle_registry::Handle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Cache file name within a registry wallet's store.
pub const CONNECTED_WALLETS_FILE: &str = "ConnectedWallets.json";

/// Known-handles file name within an account's store.
pub const KNOWN_HANDLES_FILE: &str = "HandleCache.json";

/// One cached binding: which wallet held which address at bind time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedBinding {
    /// Wallet that controlled the bound address
    pub wallet_id: String,
    /// Address recorded in the registry
    pub public_address: String,
}

/// Bindings for one handle, keyed by full asset code.
pub type PerAssetBindings = BTreeMap<String, CachedBinding>;

/// Full cache file shape, keyed by normalized handle.
pub type BindingMap = BTreeMap<String, PerAssetBindings>;

/// Load the full binding map.
///
/// Missing or corrupt data yields an empty map; absence of a cache must
/// never abort a workflow.
pub async fn load(store: &dyn DurableStore) -> BindingMap {
    let text = match store.get_text(CONNECTED_WALLETS_FILE).await {
        Ok(text) => text,
        Err(_) => return BindingMap::new(),
    };
    match serde_json::from_str(&text) {
        Ok(map) => map,
        Err(e) => {
            debug!("binding cache unreadable, starting empty: {}", e);
            BindingMap::new()
        }
    }
}

/// Bindings recorded for one handle; empty if the handle is unseen.
pub async fn for_handle(store: &dyn DurableStore, handle: &Handle) -> PerAssetBindings {
    load(store)
        .await
        .remove(&handle.normalized())
        .unwrap_or_default()
}

/// Replace the cache entry for one handle, leaving other handles untouched.
///
/// Read-modify-write of the whole file; concurrent writers for the same
/// store race and last write wins.
pub async fn save(
    store: &dyn DurableStore,
    handle: &Handle,
    bindings: PerAssetBindings,
) -> Result<()> {
    let mut map = load(store).await;
    map.insert(handle.normalized(), bindings);
    let text = serde_json::to_string(&map).map_err(|e| Error::Store(e.to_string()))?;
    store.set_text(CONNECTED_WALLETS_FILE, &text).await
}

/// Account-scoped set of handles previously seen or sent to.
///
/// Persisted in the original file shape: `{"addresses": {handle: true}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnownHandles {
    /// Membership map keyed by normalized handle.
    pub addresses: BTreeMap<String, bool>,
}

impl KnownHandles {
    /// Load from the account store; fails soft to empty.
    pub async fn load(store: &dyn DurableStore) -> Self {
        let text = match store.get_text(KNOWN_HANDLES_FILE).await {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&text) {
            Ok(known) => known,
            Err(e) => {
                debug!("known-handle cache unreadable, starting empty: {}", e);
                Self::default()
            }
        }
    }

    /// Whether `handle` has been seen before.
    pub fn contains(&self, handle: &Handle) -> bool {
        self.addresses.contains_key(&handle.normalized())
    }

    /// Add handles to the set, writing back only when membership changed.
    pub async fn add(store: &dyn DurableStore, handles: &[Handle]) -> Self {
        let mut known = Self::load(store).await;
        let mut dirty = false;
        for handle in handles {
            if known.addresses.insert(handle.normalized(), true) != Some(true) {
                dirty = true;
            }
        }

        if dirty {
            match serde_json::to_string(&known) {
                Ok(text) => {
                    if let Err(e) = store.set_text(KNOWN_HANDLES_FILE, &text).await {
                        warn!("known-handle cache write failed: {}", e);
                    }
                }
                Err(e) => warn!("known-handle cache encode failed: {}", e),
            }
        }
        known
    }
}

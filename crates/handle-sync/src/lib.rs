//! Handle binding synchronization engine
//!
//! Reconciles the on-chain handle registry with a local durable cache and
//! computes, for an account's wallet set, which wallets are bound to a
//! handle and which are not. The registry is the source of truth; the cache
//! is a best-effort mirror of bindings this device has written.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod locator;
pub mod publish;
pub mod records;
pub mod resolver;
pub mod store;
pub mod sync;
pub mod view;

pub use cache::{BindingMap, CachedBinding, KnownHandles, PerAssetBindings};
pub use error::{Error, Result};
pub use locator::{find_owner, RegistryWallet};
pub use publish::{chunk_bindings, publish};
pub use records::{check_record_send_fee, collect_transfer_records, record_send};
pub use resolver::is_wallet_connected;
pub use store::{DurableStore, FileStore, MemoryStore};
pub use sync::{refresh_connected_wallets, ConnectedWalletMap};
pub use view::{connected_wallets, not_connected_wallets, WalletListItem};

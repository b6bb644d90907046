//! Typed client for the decentralized handle registry
//!
//! Resolves human-readable handles to public addresses and pushes address
//! bindings over an injectable RPC transport.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod handle;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;
pub mod transport;
pub mod types;

pub use client::{
    BindingParam, RegistryClient, Resolution, SendRecordParams, TransferRecord,
    MAX_BINDINGS_PER_CALL,
};
pub use config::RegistryConfig;
pub use error::{Error, Result};
pub use handle::Handle;
pub use transport::{HttpTransport, RegistryTransport};
pub use types::{AssetCode, Binding, TokenMeta, WalletDescriptor};

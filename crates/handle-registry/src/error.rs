//! Error types

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// RPC error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Handle does not match the registry format
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),
}

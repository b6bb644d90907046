//! Error types for binding sync operations

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] handle_registry::Error),

    /// Registry fee could not be fetched before a mutation
    #[error("Could not fetch registry fee")]
    FeeUnavailable,

    /// Mutation would incur a fee; the account has no free quota left
    #[error("No free registry operations remaining")]
    QuotaExhausted,

    /// Durable store error
    #[error("Store error: {0}")]
    Store(String),
}

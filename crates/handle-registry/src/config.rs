//! Registry client configuration

use serde::{Deserialize, Serialize};

/// Registry client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry RPC endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://registry.handlewallet.net/v1/chain".to_string(),
            timeout_secs: 30,
        }
    }
}

//! Registry RPC transport

use crate::{Error, RegistryConfig, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Transport over which registry RPC methods are invoked.
///
/// The registry surface is a method name plus a JSON parameter object;
/// keeping the transport behind this trait lets tests script registry
/// behavior without a network.
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    /// Invoke `method` with a JSON parameter object.
    async fn call(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value>;
}

/// HTTP transport posting JSON envelopes to a registry endpoint.
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint.
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Network(format!("client build error: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }
}

#[async_trait]
impl RegistryTransport for HttpTransport {
    async fn call(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
        #[derive(Serialize)]
        struct RpcRequest<'a> {
            method: &'a str,
            params: &'a serde_json::Value,
        }

        let request = RpcRequest {
            method,
            params: &params,
        };

        debug!(method, "registry rpc call");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(format!("HTTP error: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Rpc(format!("HTTP error: {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Rpc(format!("JSON decode error: {}", e)))
    }
}

//! Registry RPC client with typed method wrappers

use crate::{Error, Handle, HttpTransport, RegistryConfig, RegistryTransport, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;

/// Hard per-call limit on binding items accepted by the registry.
pub const MAX_BINDINGS_PER_CALL: usize = 5;

/// Wire sentinel the registry returns for an unbound asset.
const UNBOUND_ADDRESS: &str = "0";

/// Outcome of a handle resolution.
///
/// The registry distinguishes a well-formed query with no binding from a
/// failed lookup; an unbound asset is a valid negative result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The handle is bound to this public address for the queried asset
    Bound(String),
    /// No binding exists for the queried asset
    Unbound,
}

impl Resolution {
    /// The bound address, if any.
    pub fn bound(self) -> Option<String> {
        match self {
            Resolution::Bound(address) => Some(address),
            Resolution::Unbound => None,
        }
    }
}

/// One binding item in an `add_public_addresses` call
#[derive(Debug, Clone, Serialize)]
pub struct BindingParam {
    /// Parent chain code
    pub chain_code: String,
    /// Token code on that chain
    pub token_code: String,
    /// Public address to bind
    pub public_address: String,
}

/// Send-record payload stored in the registry alongside a transfer
#[derive(Debug, Clone, Serialize)]
pub struct SendRecordParams {
    /// Receiving handle
    pub payee_handle: String,
    /// Sender's public address
    pub payer_public_address: String,
    /// Receiver's public address
    pub payee_public_address: String,
    /// Transfer amount in display units
    pub amount: String,
    /// Chain the transfer happened on
    pub chain_code: String,
    /// Token that was transferred
    pub token_code: String,
    /// On-chain transaction id
    pub tx_id: String,
    /// Free-form memo
    pub memo: String,
}

/// A send record previously stored in the registry
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRecord {
    /// Sending handle
    pub payer_handle: String,
    /// Receiving handle
    pub payee_handle: String,
    /// Sender's public address
    pub payer_public_address: String,
    /// Receiver's public address
    pub payee_public_address: String,
    /// Transfer amount in display units
    pub amount: String,
    /// Chain the transfer happened on
    pub chain_code: String,
    /// Token that was transferred
    pub token_code: String,
    /// On-chain transaction id
    #[serde(default)]
    pub tx_id: String,
    /// Free-form memo
    #[serde(default)]
    pub memo: String,
}

/// Registry RPC client.
///
/// An explicitly constructed, injectable instance; no process-wide client
/// state.
#[derive(Clone)]
pub struct RegistryClient {
    transport: Arc<dyn RegistryTransport>,
}

impl RegistryClient {
    /// Client over an existing transport.
    pub fn new(transport: Arc<dyn RegistryTransport>) -> Self {
        Self { transport }
    }

    /// Client over an HTTP transport built from `config`.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    /// Call a registry method with typed params and response.
    async fn call<T: Serialize, R: DeserializeOwned>(&self, method: &str, params: T) -> Result<R> {
        let params = serde_json::to_value(params)
            .map_err(|e| Error::Rpc(format!("params encode error: {}", e)))?;
        let value = self.transport.call(method, params).await?;
        serde_json::from_value(value)
            .map_err(|e| Error::Rpc(format!("response decode error: {}", e)))
    }

    /// Resolve the address bound to `handle` for one asset.
    pub async fn resolve_address(
        &self,
        handle: &Handle,
        chain_code: &str,
        token_code: &str,
    ) -> Result<Resolution> {
        #[derive(Serialize)]
        struct Params<'a> {
            handle: String,
            chain_code: &'a str,
            token_code: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            public_address: String,
        }

        let response: Response = self
            .call(
                "get_public_address",
                Params {
                    handle: handle.normalized(),
                    chain_code,
                    token_code,
                },
            )
            .await?;

        if response.public_address.is_empty() || response.public_address == UNBOUND_ADDRESS {
            Ok(Resolution::Unbound)
        } else {
            Ok(Resolution::Bound(response.public_address))
        }
    }

    /// Fee the registry would charge for an `add_public_addresses` call.
    ///
    /// `0` means the account still has free quota.
    pub async fn fee_for_add_bindings(&self, handle: &Handle) -> Result<u64> {
        #[derive(Serialize)]
        struct Params {
            handle: String,
        }

        #[derive(Deserialize)]
        struct Response {
            fee: u64,
        }

        let response: Response = self
            .call(
                "get_fee_for_add_address",
                Params {
                    handle: handle.normalized(),
                },
            )
            .await?;
        Ok(response.fee)
    }

    /// Record address bindings for `handle`.
    ///
    /// The registry accepts at most [`MAX_BINDINGS_PER_CALL`] items per call.
    pub async fn add_bindings(
        &self,
        handle: &Handle,
        bindings: &[BindingParam],
        max_fee: u64,
    ) -> Result<()> {
        debug_assert!(bindings.len() <= MAX_BINDINGS_PER_CALL);

        #[derive(Serialize)]
        struct Params<'a> {
            handle: String,
            public_addresses: &'a [BindingParam],
            max_fee: u64,
        }

        let _: serde_json::Value = self
            .call(
                "add_public_addresses",
                Params {
                    handle: handle.normalized(),
                    public_addresses: bindings,
                    max_fee,
                },
            )
            .await?;
        Ok(())
    }

    /// List the handles owned by a registry public key.
    pub async fn handles_owned_by(&self, public_key: &str) -> Result<Vec<String>> {
        #[derive(Serialize)]
        struct Params<'a> {
            public_key: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            handles: Vec<String>,
        }

        let response: Response = self
            .call("get_handles_for_key", Params { public_key })
            .await?;
        Ok(response.handles)
    }

    /// Ask the registry whether `handle` is a valid handle.
    pub async fn is_handle_valid(&self, handle: &str) -> Result<bool> {
        #[derive(Serialize)]
        struct Params<'a> {
            handle: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            valid: bool,
        }

        let response: Response = self.call("validate_handle", Params { handle }).await?;
        Ok(response.valid)
    }

    /// Validate a raw handle and resolve its bound address for one asset.
    ///
    /// Returns `None` when the handle is valid but unbound.
    pub async fn check_public_address(
        &self,
        raw_handle: &str,
        chain_code: &str,
        token_code: &str,
    ) -> Result<Option<String>> {
        if !self.is_handle_valid(raw_handle).await? {
            return Err(Error::InvalidHandle(raw_handle.to_string()));
        }
        let handle = Handle::parse(raw_handle)?;
        let resolution = self.resolve_address(&handle, chain_code, token_code).await?;
        Ok(resolution.bound())
    }

    /// Fee the registry would charge for storing a send record.
    pub async fn fee_for_record_send(&self, handle: &Handle) -> Result<u64> {
        #[derive(Serialize)]
        struct Params<'a> {
            end_point: &'a str,
            handle: String,
        }

        #[derive(Deserialize)]
        struct Response {
            fee: u64,
        }

        let response: Response = self
            .call(
                "get_fee",
                Params {
                    end_point: "record_send",
                    handle: handle.normalized(),
                },
            )
            .await?;
        Ok(response.fee)
    }

    /// Store a send record under the payer's handle.
    pub async fn record_send(&self, payer: &Handle, record: &SendRecordParams) -> Result<()> {
        #[derive(Serialize)]
        struct Params<'a> {
            payer_handle: String,
            #[serde(flatten)]
            record: &'a SendRecordParams,
            max_fee: u64,
            status: &'a str,
        }

        let _: serde_json::Value = self
            .call(
                "record_send",
                Params {
                    payer_handle: payer.normalized(),
                    record,
                    max_fee: 0,
                    status: "sent_to_blockchain",
                },
            )
            .await?;
        Ok(())
    }

    /// Fetch send records stored under a registry public key.
    pub async fn transfer_records(&self, public_key: &str) -> Result<Vec<TransferRecord>> {
        #[derive(Serialize)]
        struct Params<'a> {
            public_key: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            records: Vec<TransferRecord>,
        }

        let response: Response = self.call("get_records", Params { public_key }).await?;
        Ok(response.records)
    }
}

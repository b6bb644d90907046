//! Test support: scripted registry transport
//!
//! Routes each RPC method to a programmed handler and records every call,
//! so engine tests can model registry behavior without a network.

use crate::{Error, RegistryTransport, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Handler invoked for one RPC method.
pub type Handler = Box<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Scripted transport for tests.
///
/// Every call fails with an RPC error until a handler is programmed for its
/// method.
#[derive(Default)]
pub struct ScriptedTransport {
    handlers: Mutex<HashMap<String, Handler>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    /// Empty transport with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Program the handler for `method`, replacing any previous one.
    pub fn on<F>(&self, method: &str, handler: F)
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.handlers
            .lock()
            .unwrap()
            .insert(method.to_string(), Box::new(handler));
    }

    /// Number of calls made to `method` so far.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .count()
    }

    /// Every `(method, params)` pair in call order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistryTransport for ScriptedTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params.clone()));
        let handlers = self.handlers.lock().unwrap();
        match handlers.get(method) {
            Some(handler) => handler(&params),
            None => Err(Error::Rpc(format!("no handler for method {}", method))),
        }
    }
}

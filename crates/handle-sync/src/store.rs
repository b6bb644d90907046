//! Durable text store seam
//!
//! The engine persists its caches through this narrow key/value contract.
//! Every caller treats store failures as soft: caching is a performance
//! optimization, not a correctness requirement.

use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Key/value text persistence scoped to one wallet or account.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Read the text stored under `key`.
    async fn get_text(&self, key: &str) -> Result<String>;

    /// Replace the text stored under `key`.
    async fn set_text(&self, key: &str, text: &str) -> Result<()>;
}

/// Directory-backed store; one file per key.
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Store rooted at `base`; the directory is created on first write.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait]
impl DurableStore for FileStore {
    async fn get_text(&self, key: &str) -> Result<String> {
        tokio::fs::read_to_string(self.base.join(key))
            .await
            .map_err(|e| Error::Store(e.to_string()))
    }

    async fn set_text(&self, key: &str, text: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.base)
            .await
            .map_err(|e| Error::Store(e.to_string()))?;
        tokio::fs::write(self.base.join(key), text)
            .await
            .map_err(|e| Error::Store(e.to_string()))
    }
}

/// In-memory store for tests; counts writes so persistence timing can be
/// asserted.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_text` calls made so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DurableStore for MemoryStore {
    async fn get_text(&self, key: &str) -> Result<String> {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::Store(format!("missing key: {}", key)))
    }

    async fn set_text(&self, key: &str, text: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), text.to_string());
        Ok(())
    }
}

//! Batched registry writes
//!
//! Pushes desired bindings to the registry in fixed-size chunks, persisting
//! the cache after each confirmed write so an interruption loses at most
//! one chunk's worth of cache entries.

use crate::cache::{self, CachedBinding};
use crate::store::DurableStore;
use crate::{Error, Result};
use handle_registry::{Binding, BindingParam, Handle, RegistryClient, MAX_BINDINGS_PER_CALL};
use tracing::{info, warn};

/// Split bindings into chunks of at most `size`, preserving order.
///
/// Every chunk except possibly the last is full.
pub fn chunk_bindings(bindings: &[Binding], size: usize) -> Vec<&[Binding]> {
    assert!(size > 0);
    bindings.chunks(size).collect()
}

/// Push `bindings` to the registry for `handle`.
///
/// Each chunk is fee-checked, written, and then mirrored into the per-handle
/// cache. A fee failure or registry-write failure aborts the operation;
/// chunks already written stay committed on-chain and cached, with no
/// compensating rollback. Safe to retry: the registry keeps one address per
/// asset per handle, so re-publishing re-confirms rather than duplicates.
pub async fn publish(
    client: &RegistryClient,
    store: &dyn DurableStore,
    handle: &Handle,
    bindings: &[Binding],
) -> Result<()> {
    if bindings.is_empty() {
        return Ok(());
    }

    let mut snapshot = cache::for_handle(store, handle).await;

    for chunk in chunk_bindings(bindings, MAX_BINDINGS_PER_CALL) {
        // The account must still have free quota; paying registry fees is
        // not allowed here. Checked before every chunk since the fee can
        // change between calls.
        let fee = client
            .fee_for_add_bindings(handle)
            .await
            .map_err(|_| Error::FeeUnavailable)?;
        if fee > 0 {
            return Err(Error::QuotaExhausted);
        }

        let params: Vec<BindingParam> = chunk
            .iter()
            .map(|binding| BindingParam {
                chain_code: binding.asset.chain_code.clone(),
                token_code: binding.asset.token_code.clone(),
                public_address: binding.public_address.clone(),
            })
            .collect();
        client.add_bindings(handle, &params, fee).await?;

        for binding in chunk {
            snapshot.insert(
                binding.asset.full_code(),
                CachedBinding {
                    wallet_id: binding.wallet_id.clone(),
                    public_address: binding.public_address.clone(),
                },
            );
        }
        if let Err(e) = cache::save(store, handle, snapshot.clone()).await {
            warn!(handle = handle.as_str(), "binding cache write failed: {}", e);
        }

        info!(
            handle = handle.as_str(),
            count = chunk.len(),
            "published binding chunk"
        );
    }

    Ok(())
}

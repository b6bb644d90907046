//! Registry send records
//!
//! Memo records attached to transfers between handles. Writes are fee-gated
//! like binding writes; retrieval is best-effort across wallets.

use crate::locator::RegistryWallet;
use crate::{Error, Result};
use handle_registry::{Handle, RegistryClient, SendRecordParams, TransferRecord};
use tracing::debug;

/// Check that storing a send record would cost nothing.
///
/// Fails with [`Error::QuotaExhausted`] when the registry would charge a
/// fee, and [`Error::FeeUnavailable`] when the fee cannot be fetched.
pub async fn check_record_send_fee(client: &RegistryClient, handle: &Handle) -> Result<()> {
    let fee = client
        .fee_for_record_send(handle)
        .await
        .map_err(|_| Error::FeeUnavailable)?;
    if fee > 0 {
        return Err(Error::QuotaExhausted);
    }
    Ok(())
}

/// Store a send record under the payer's handle.
pub async fn record_send(
    client: &RegistryClient,
    payer: &Handle,
    params: &SendRecordParams,
) -> Result<()> {
    client.record_send(payer, params).await?;
    Ok(())
}

/// Collect transfer records across registry wallets.
///
/// A failed fetch for one wallet is skipped, not fatal; the caller gets
/// whatever the reachable wallets returned.
pub async fn collect_transfer_records(
    client: &RegistryClient,
    wallets: &[RegistryWallet],
) -> Vec<TransferRecord> {
    let mut records = Vec::new();
    for wallet in wallets {
        match client.transfer_records(&wallet.public_key).await {
            Ok(mut batch) => records.append(&mut batch),
            Err(e) => debug!(
                wallet = wallet.descriptor.id.as_str(),
                "transfer record fetch failed: {}",
                e
            ),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use handle_registry::testing::ScriptedTransport;
    use handle_registry::WalletDescriptor;
    use serde_json::json;
    use std::sync::Arc;

    fn handle() -> Handle {
        Handle::parse("alice@wallet").unwrap()
    }

    fn registry_wallet(id: &str, public_key: &str) -> RegistryWallet {
        RegistryWallet {
            descriptor: WalletDescriptor {
                id: id.to_string(),
                name: "Registry".to_string(),
                chain_code: "REG".to_string(),
                receive_address: "reg-addr".to_string(),
                enabled_tokens: Vec::new(),
                tokens: Vec::new(),
                symbol_image: String::new(),
            },
            public_key: public_key.to_string(),
        }
    }

    fn record(payer: &str) -> serde_json::Value {
        json!({
            "payer_handle": payer,
            "payee_handle": "bob@wallet",
            "payer_public_address": "addr1",
            "payee_public_address": "addr2",
            "amount": "1.5",
            "chain_code": "BTC",
            "token_code": "BTC"
        })
    }

    #[tokio::test]
    async fn test_zero_fee_passes() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.on("get_fee", |_| Ok(json!({ "fee": 0 })));
        let client = RegistryClient::new(transport);

        check_record_send_fee(&client, &handle()).await.unwrap();
    }

    #[tokio::test]
    async fn test_nonzero_fee_is_quota_exhausted() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.on("get_fee", |_| Ok(json!({ "fee": 800 })));
        let client = RegistryClient::new(transport);

        let result = check_record_send_fee(&client, &handle()).await;
        assert!(matches!(result, Err(Error::QuotaExhausted)));
    }

    #[tokio::test]
    async fn test_fee_failure_is_fee_unavailable() {
        let client = RegistryClient::new(Arc::new(ScriptedTransport::new()));
        let result = check_record_send_fee(&client, &handle()).await;
        assert!(matches!(result, Err(Error::FeeUnavailable)));
    }

    #[tokio::test]
    async fn test_collect_skips_failing_wallets() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.on("get_records", |params| {
            if params["public_key"] == "key1" {
                Ok(json!({ "records": [record("alice@wallet")] }))
            } else {
                Err(handle_registry::Error::Network("timeout".to_string()))
            }
        });
        let client = RegistryClient::new(transport);

        let wallets = vec![registry_wallet("w1", "key1"), registry_wallet("w2", "key2")];
        let records = collect_transfer_records(&client, &wallets).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payer_handle, "alice@wallet");
    }
}

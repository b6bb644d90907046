//! Handle ownership lookup across registry-capable wallets

use crate::Result;
use handle_registry::{Handle, RegistryClient, WalletDescriptor};

/// A wallet capable of owning registry handles.
#[derive(Debug, Clone)]
pub struct RegistryWallet {
    /// Underlying wallet descriptor
    pub descriptor: WalletDescriptor,
    /// Registry public key the wallet's handles are listed under
    pub public_key: String,
}

/// Find which registry wallet owns `handle`.
///
/// Linear scan; handles are stored case-sensitively in the registry but
/// compared case-insensitively. `Ok(None)` means no provided wallet owns
/// the handle; a lookup failure is an error so callers can tell "no owner"
/// from "registry unreachable".
pub async fn find_owner<'a>(
    client: &RegistryClient,
    handle: &Handle,
    wallets: &'a [RegistryWallet],
) -> Result<Option<&'a RegistryWallet>> {
    for wallet in wallets {
        let owned = client.handles_owned_by(&wallet.public_key).await?;
        if owned
            .iter()
            .any(|name| name.eq_ignore_ascii_case(handle.as_str()))
        {
            return Ok(Some(wallet));
        }
    }
    Ok(None)
}

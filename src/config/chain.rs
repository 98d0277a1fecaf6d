//! NFT contract and chain endpoint settings.

use serde::{Deserialize, Serialize};

fn default_rpc_url() -> String {
    "https://rpc.sepolia.mantle.xyz".to_owned()
}

fn default_contract_address() -> String {
    "0x6847f4ef767fc976f9158a1d0de7cb60e1af4ebf".to_owned()
}

fn default_explorer_base() -> String {
    "https://sepolia.mantlescan.xyz/address".to_owned()
}

fn default_ipfs_gateway() -> String {
    "https://ipfs.io/ipfs/".to_owned()
}

/// ERC-721 lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainConfig {
    /// JSON-RPC endpoint of the chain.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Address of the ERC-721 contract gating the mood room.
    #[serde(default = "default_contract_address")]
    pub contract_address: String,

    /// Block-explorer address page root, without trailing slash.
    #[serde(default = "default_explorer_base")]
    pub explorer_base: String,

    /// HTTP gateway substituted for the `ipfs://` scheme.
    #[serde(default = "default_ipfs_gateway")]
    pub ipfs_gateway: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            contract_address: default_contract_address(),
            explorer_base: default_explorer_base(),
            ipfs_gateway: default_ipfs_gateway(),
        }
    }
}

//! Read-only access to an ERC-721 contract.

use crate::nft::abi::AbiError;
use crate::nft::domain::{Address, Uint256};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for contract reads.
pub type ChainResult<T> = Result<T, ChainError>;

/// View calls on the configured ERC-721 contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Erc721Reader: Send + Sync {
    /// Returns how many tokens `owner` holds.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when the node rejects the call or the return
    /// data does not decode.
    async fn balance_of(&self, owner: &Address) -> ChainResult<Uint256>;

    /// Returns the id of the `index`-th token held by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when the call reverts (for example an index
    /// past the balance) or the return data does not decode.
    async fn token_of_owner_by_index(&self, owner: &Address, index: Uint256)
    -> ChainResult<Uint256>;

    /// Returns the metadata URI of `token_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when the call reverts or the return data does
    /// not decode.
    async fn token_uri(&self, token_id: Uint256) -> ChainResult<String>;
}

/// Errors returned by contract readers.
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    /// The node answered with a JSON-RPC error object.
    #[error("chain call failed ({code}): {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Message reported by the node.
        message: String,
    },

    /// The node answered with a non-success HTTP status.
    #[error("chain endpoint responded with status: {status}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The request could not be delivered or the response not read.
    #[error("chain request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The call returned data that is not the expected ABI value.
    #[error("chain call returned malformed data: {0}")]
    Abi(#[from] AbiError),

    /// The balance is too large to enumerate.
    #[error("balance {0} is too large to enumerate")]
    BalanceOverflow(Uint256),
}

impl ChainError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

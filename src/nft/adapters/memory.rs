//! In-memory holdings adapters for tests and offline runs.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::nft::{
    domain::{Address, Uint256},
    ports::{
        ChainError, ChainResult, Erc721Reader, MetadataError, MetadataFetcher, MetadataResult,
    },
};

fn lock_error(err: &dyn std::fmt::Display) -> ChainError {
    ChainError::transport(std::io::Error::other(err.to_string()))
}

/// Contract double holding a token list per owner.
///
/// Owners are matched case-insensitively, as addresses are on chain.
#[derive(Debug, Clone, Default)]
pub struct InMemoryErc721Reader {
    state: Arc<RwLock<HashMap<String, Vec<(Uint256, String)>>>>,
}

impl InMemoryErc721Reader {
    /// Creates a contract with no tokens minted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `token_id` with `uri` to `owner`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn mint(
        &self,
        owner: &Address,
        token_id: Uint256,
        uri: impl Into<String>,
    ) -> ChainResult<()> {
        self.state
            .write()
            .map_err(|err| lock_error(&err))?
            .entry(owner.as_str().to_ascii_lowercase())
            .or_default()
            .push((token_id, uri.into()));
        Ok(())
    }

    fn tokens_of(&self, owner: &Address) -> ChainResult<Vec<(Uint256, String)>> {
        Ok(self
            .state
            .read()
            .map_err(|err| lock_error(&err))?
            .get(&owner.as_str().to_ascii_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    fn all_tokens(&self) -> ChainResult<Vec<(Uint256, String)>> {
        Ok(self
            .state
            .read()
            .map_err(|err| lock_error(&err))?
            .values()
            .flatten()
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Erc721Reader for InMemoryErc721Reader {
    async fn balance_of(&self, owner: &Address) -> ChainResult<Uint256> {
        let count = u64::try_from(self.tokens_of(owner)?.len())
            .map_err(|_| ChainError::BalanceOverflow(Uint256::ZERO))?;
        Ok(Uint256::from_u64(count))
    }

    async fn token_of_owner_by_index(
        &self,
        owner: &Address,
        index: Uint256,
    ) -> ChainResult<Uint256> {
        let tokens = self.tokens_of(owner)?;
        index
            .to_u64()
            .and_then(|position| usize::try_from(position).ok())
            .and_then(|position| tokens.get(position))
            .map(|(token_id, _)| *token_id)
            .ok_or_else(|| ChainError::Rpc {
                code: 3,
                message: "execution reverted: owner index out of bounds".to_owned(),
            })
    }

    async fn token_uri(&self, token_id: Uint256) -> ChainResult<String> {
        self.all_tokens()?
            .into_iter()
            .find(|(id, _)| *id == token_id)
            .map(|(_, uri)| uri)
            .ok_or_else(|| ChainError::Rpc {
                code: 3,
                message: "execution reverted: URI query for nonexistent token".to_owned(),
            })
    }
}

/// Metadata host serving preset documents by URI.
///
/// Unknown URIs answer with status 404.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataFetcher {
    documents: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemoryMetadataFetcher {
    /// Creates a host with no documents.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `document` at `uri`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn publish(&self, uri: impl Into<String>, document: Value) -> MetadataResult<()> {
        self.documents
            .write()
            .map_err(|err| MetadataError::transport(std::io::Error::other(err.to_string())))?
            .insert(uri.into(), document);
        Ok(())
    }
}

#[async_trait]
impl MetadataFetcher for InMemoryMetadataFetcher {
    async fn fetch(&self, uri: &str) -> MetadataResult<Value> {
        self.documents
            .read()
            .map_err(|err| MetadataError::transport(std::io::Error::other(err.to_string())))?
            .get(uri)
            .cloned()
            .ok_or(MetadataError::UpstreamStatus { status: 404 })
    }
}

//! Service layer for wallet holdings.
//!
//! Provides [`NftHoldingsService`], which validates the wallet, reads the
//! balance, enumerates each token in index order and attaches its metadata.

use crate::nft::{
    domain::{Address, NftHoldings, TokenHolding, ValidationError},
    ports::{ChainError, Erc721Reader, MetadataFetcher},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for the holdings lookup.
#[derive(Debug, Clone, Error)]
pub enum NftServiceError {
    /// The request was rejected before touching the chain.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A contract read failed.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Result type for holdings service operations.
pub type NftServiceResult<T> = Result<T, NftServiceError>;

/// Holdings lookup orchestration service.
///
/// Token reads run one after another. A metadata failure is logged and
/// reported as `null` for that token; a contract failure aborts the lookup.
pub struct NftHoldingsService<R, F>
where
    R: Erc721Reader + ?Sized,
    F: MetadataFetcher + ?Sized,
{
    reader: Arc<R>,
    metadata: Arc<F>,
    contract: Address,
    explorer_base: String,
}

impl<R, F> NftHoldingsService<R, F>
where
    R: Erc721Reader + ?Sized,
    F: MetadataFetcher + ?Sized,
{
    /// Creates a service for `contract`.
    #[must_use]
    pub fn new(
        reader: Arc<R>,
        metadata: Arc<F>,
        contract: Address,
        explorer_base: impl Into<String>,
    ) -> Self {
        Self {
            reader,
            metadata,
            contract,
            explorer_base: explorer_base.into(),
        }
    }

    /// Returns the contract this service reads.
    #[must_use]
    pub const fn contract(&self) -> &Address {
        &self.contract
    }

    /// Looks up the holdings of `wallet`.
    ///
    /// # Errors
    ///
    /// Returns [`NftServiceError::Validation`] when `wallet` is absent, empty
    /// or not an address, and [`NftServiceError::Chain`] when a contract read
    /// fails.
    pub async fn holdings(&self, wallet: Option<&str>) -> NftServiceResult<NftHoldings> {
        let owner = match wallet {
            Some(raw) if !raw.is_empty() => Address::parse(raw)?,
            _ => return Err(ValidationError::MissingWalletAddress.into()),
        };

        let balance = self.reader.balance_of(&owner).await?;
        let count = balance
            .to_u64()
            .ok_or(ChainError::BalanceOverflow(balance))?;

        let mut tokens = Vec::new();
        for index in 0..count {
            let token_id = self
                .reader
                .token_of_owner_by_index(&owner, index.into())
                .await?;
            let token_uri = self.reader.token_uri(token_id).await?;
            let metadata = self
                .metadata
                .fetch(&token_uri)
                .await
                .inspect_err(|error| warn!(%token_id, %error, "failed to fetch token metadata"))
                .ok();
            tokens.push(TokenHolding::new(token_id, token_uri, metadata));
        }

        info!(wallet = %owner, %balance, "resolved wallet holdings");
        Ok(NftHoldings::new(
            owner,
            self.contract.clone(),
            balance,
            tokens,
            &self.explorer_base,
        ))
    }
}

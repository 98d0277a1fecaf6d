//! Holdings report returned by `/nft-holdings`.

use super::{Address, Uint256};
use serde::Serialize;
use serde_json::Value;

/// One token owned by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    token_id: Uint256,
    #[serde(rename = "tokenURI")]
    token_uri: String,
    metadata: Option<Value>,
}

impl TokenHolding {
    /// Creates a holding; `metadata` is `None` when it could not be fetched.
    #[must_use]
    pub fn new(token_id: Uint256, token_uri: impl Into<String>, metadata: Option<Value>) -> Self {
        Self {
            token_id,
            token_uri: token_uri.into(),
            metadata,
        }
    }

    /// Returns the token id.
    #[must_use]
    pub const fn token_id(&self) -> Uint256 {
        self.token_id
    }

    /// Returns the token URI exactly as the contract reported it.
    #[must_use]
    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    /// Returns the metadata document, if it was fetched.
    #[must_use]
    pub const fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }
}

/// Wallet holdings for one contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftHoldings {
    wallet_address: Address,
    contract_address: Address,
    balance: Uint256,
    tokens: Vec<TokenHolding>,
    explorer_url: String,
}

impl NftHoldings {
    /// Creates a report. The explorer link is `{explorer_base}/{contract}`.
    #[must_use]
    pub fn new(
        wallet_address: Address,
        contract_address: Address,
        balance: Uint256,
        tokens: Vec<TokenHolding>,
        explorer_base: &str,
    ) -> Self {
        let explorer_url = format!(
            "{}/{}",
            explorer_base.trim_end_matches('/'),
            contract_address
        );
        Self {
            wallet_address,
            contract_address,
            balance,
            tokens,
            explorer_url,
        }
    }

    /// Returns the queried wallet.
    #[must_use]
    pub const fn wallet_address(&self) -> &Address {
        &self.wallet_address
    }

    /// Returns the contract the tokens belong to.
    #[must_use]
    pub const fn contract_address(&self) -> &Address {
        &self.contract_address
    }

    /// Returns the balance reported by the contract.
    #[must_use]
    pub const fn balance(&self) -> Uint256 {
        self.balance
    }

    /// Returns the enumerated tokens, in index order.
    #[must_use]
    pub fn tokens(&self) -> &[TokenHolding] {
        &self.tokens
    }

    /// Returns the block-explorer link for the contract.
    #[must_use]
    pub fn explorer_url(&self) -> &str {
        &self.explorer_url
    }
}

//! Validation errors for holdings requests.

use thiserror::Error;

/// Rejections of caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The request carried no wallet address.
    #[error("walletAddress query parameter is required")]
    MissingWalletAddress,

    /// The supplied value is not a `0x`-prefixed 20-byte hex address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

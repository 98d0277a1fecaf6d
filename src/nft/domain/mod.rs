//! Domain types for ERC-721 holdings.

mod address;
mod error;
mod holdings;
mod uint;

pub use address::Address;
pub use error::ValidationError;
pub use holdings::{NftHoldings, TokenHolding};
pub use uint::Uint256;

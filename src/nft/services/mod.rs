//! Orchestration services for the holdings lookup.

mod holdings;

pub use holdings::{NftHoldingsService, NftServiceError, NftServiceResult};

//! Port contracts for the holdings lookup.

pub mod metadata;
pub mod reader;

pub use metadata::{MetadataError, MetadataFetcher, MetadataResult};
pub use reader::{ChainError, ChainResult, Erc721Reader};

#[cfg(test)]
pub use metadata::MockMetadataFetcher;
#[cfg(test)]
pub use reader::MockErc721Reader;

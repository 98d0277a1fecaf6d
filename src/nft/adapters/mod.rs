//! Adapter implementations for the holdings ports.

pub mod json_rpc;
pub mod memory;
pub mod metadata;

pub use json_rpc::JsonRpcErc721Reader;
pub use memory::{InMemoryErc721Reader, InMemoryMetadataFetcher};
pub use metadata::{HttpMetadataFetcher, resolve_gateway_uri};

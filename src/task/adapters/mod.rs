//! Adapter implementations for task retrieval ports.

pub mod memory;
pub mod notion;

pub use memory::InMemoryTaskSource;
pub use notion::NotionTaskSource;

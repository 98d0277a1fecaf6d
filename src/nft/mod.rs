//! ERC-721 holdings lookup.
//!
//! Reads a wallet's token balance and enumerates its tokens from the
//! configured contract over JSON-RPC, then resolves each token's metadata
//! document. Calls are encoded by hand in [`abi`]; no wallet keys are ever
//! involved.

pub mod abi;
pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

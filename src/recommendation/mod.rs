//! Model-driven focus-session recommendations for Addy.
//!
//! The pipeline fetches tasks, computes aggregate progress, asks a completion
//! model to rank the tasks into timeboxed sessions, normalises the reply and
//! keeps the result in a single-slot TTL cache. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - The response cache in [`cache`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod cache;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

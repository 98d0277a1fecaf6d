//! Task retrieval and aggregate progress for Addy.
//!
//! Tasks live in an external structured database. This module normalises the
//! provider's typed properties into flat [`domain::Task`] records and derives
//! [`domain::OverallProgress`] statistics from them. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

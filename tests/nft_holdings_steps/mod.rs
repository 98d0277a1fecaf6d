//! Step definitions for NFT holdings scenarios.

mod given;
mod then;
mod when;
pub mod world;

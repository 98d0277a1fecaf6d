//! Step definitions for session recommendation scenarios.

mod given;
mod then;
mod when;
pub mod world;

//! Addy: aggregation server for a productivity assistant.
//!
//! The server proxies a task database, a commit feed, a language-completion
//! API and an ERC-721 balance lookup, reshaping each into the JSON the mobile
//! client consumes.
//!
//! # Architecture
//!
//! Addy follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP APIs, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task retrieval and aggregate progress statistics
//! - [`recommendation`]: Model-driven session recommendations and caching
//! - [`commit_feed`]: Latest commit lookup on the source-control host
//! - [`nft`]: ERC-721 holdings lookup
//! - [`focus`]: Focus-session countdown and scheduled refresh tasks
//! - [`http`]: Routing and the HTTP server loop
//! - [`config`]: Layered configuration
//! - [`app`]: Wiring of adapters into a router

pub mod app;
pub mod clock;
pub mod commit_feed;
pub mod config;
pub mod focus;
pub mod http;
pub mod nft;
pub mod recommendation;
pub mod task;
pub mod telemetry;

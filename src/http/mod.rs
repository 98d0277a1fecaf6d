//! HTTP surface of the server.
//!
//! [`router::ApiRouter`] maps parsed requests onto the bounded contexts and
//! is independent of the transport. [`server::ApiServer`] feeds it from a
//! `tiny_http` listener.

pub mod error;
pub mod request;
pub mod router;
pub mod server;

#[cfg(test)]
mod tests;

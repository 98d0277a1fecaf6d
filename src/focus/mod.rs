//! Focus-session countdown for the terminal client.
//!
//! A [`session::FocusSession`] is a fixed-length countdown derived from an
//! injected clock. [`scheduler::ScheduledTask`] runs the one-second display
//! tick and the five-second commit poll; both stop when the session ends or
//! when their owner drops them.

pub mod client;
pub mod runner;
pub mod scheduler;
pub mod session;

#[cfg(test)]
mod tests;

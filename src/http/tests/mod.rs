//! Unit tests for the HTTP surface.

mod request_tests;
mod support;

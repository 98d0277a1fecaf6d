//! Unit tests for the focus-session client.

mod session_tests;

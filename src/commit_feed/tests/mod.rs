//! Unit tests for the commit feed context.

mod memory_tests;

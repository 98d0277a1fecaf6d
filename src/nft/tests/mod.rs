//! Unit tests for the holdings context.

//! Shared helpers for the core test suite.

/// Program, test case and level builders.
pub mod builder;

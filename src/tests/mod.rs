//! Crate-level tests for Pono Match.
//!
//! Tests that exercise a single function live beside it; this module holds
//! the ones that cut across a whole component (configuration loading, error
//! reporting).

pub mod config_tests;

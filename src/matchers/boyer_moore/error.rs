// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Boyer-Moore Pattern Matcher.

/// Error types for Boyer-Moore Pattern Matcher operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoyerMooreError {
    /// Empty pattern provided
    #[error("Pattern cannot be empty")]
    EmptyPattern,
}

/// Result type for Boyer-Moore Pattern Matcher operations
pub type Result<T> = std::result::Result<T, BoyerMooreError>;

// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Wire types of the HTTP API.
//!
//! Field names are part of the contract with the existing web client and
//! must not change. In particular the single-match response uses
//! `best_case`/`worst_case`/`average_case` while compare entries use
//! `best`/`worst`/`avg`.

use serde::{Deserialize, Serialize};

use crate::engine::{ComparisonResult, MatchResult};
use crate::error::EngineError;

/// Success body of `POST /api/match`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Canonical algorithm identifier
    pub algorithm: String,
    /// Number of matches
    pub matches: usize,
    /// Match start offsets
    pub indices: Vec<usize>,
    /// Elapsed time in milliseconds
    pub time_ms: f64,
    /// Best-case complexity label
    pub best_case: String,
    /// Worst-case complexity label
    pub worst_case: String,
    /// Average-case complexity label
    pub average_case: String,
}

impl From<&MatchResult> for MatchResponse {
    fn from(result: &MatchResult) -> Self {
        Self {
            algorithm: result.algorithm.id().to_string(),
            matches: result.match_count(),
            indices: result.indices.clone(),
            time_ms: result.time_ms(),
            best_case: result.complexity.best.to_string(),
            worst_case: result.complexity.worst.to_string(),
            average_case: result.complexity.average.to_string(),
        }
    }
}

/// One entry of the `POST /api/compare` results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareEntry {
    /// Canonical algorithm identifier
    pub algorithm: String,
    /// Number of matches
    pub matches: usize,
    /// Match start offsets
    pub indices: Vec<usize>,
    /// Elapsed time in milliseconds
    pub time_ms: f64,
    /// Best-case complexity label
    pub best: String,
    /// Worst-case complexity label
    pub worst: String,
    /// Average-case complexity label
    pub avg: String,
}

impl From<&MatchResult> for CompareEntry {
    fn from(result: &MatchResult) -> Self {
        Self {
            algorithm: result.algorithm.id().to_string(),
            matches: result.match_count(),
            indices: result.indices.clone(),
            time_ms: result.time_ms(),
            best: result.complexity.best.to_string(),
            worst: result.complexity.worst.to_string(),
            avg: result.complexity.average.to_string(),
        }
    }
}

/// Success body of `POST /api/compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    /// One entry per algorithm, in canonical order
    pub results: Vec<CompareEntry>,
    /// Identifier of the fastest algorithm
    pub fastest: String,
}

impl From<&ComparisonResult> for CompareResponse {
    fn from(comparison: &ComparisonResult) -> Self {
        Self {
            results: comparison.results.iter().map(CompareEntry::from).collect(),
            fastest: comparison.fastest.id().to_string(),
        }
    }
}

/// Failure body of both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the problem
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body from a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&EngineError> for ErrorResponse {
    fn from(err: &EngineError) -> Self {
        Self::new(err.to_string())
    }
}

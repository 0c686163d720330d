//! Result values produced by the engine.

use std::time::Duration;

use super::complexity::Complexity;
use super::timing::duration_to_ms;
use crate::matchers::Algorithm;

/// Outcome of running one algorithm over one (text, pattern) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The algorithm that produced this result
    pub algorithm: Algorithm,
    /// Match start offsets in bytes, ascending and distinct
    pub indices: Vec<usize>,
    /// Wall time spent inside the matcher
    pub elapsed: Duration,
    /// Complexity labels of the algorithm
    pub complexity: Complexity,
}

impl MatchResult {
    /// Number of matches.
    pub fn match_count(&self) -> usize {
        self.indices.len()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn time_ms(&self) -> f64 {
        duration_to_ms(self.elapsed)
    }
}

/// Outcome of running every algorithm over the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// One result per algorithm, in canonical order
    pub results: Vec<MatchResult>,
    /// The algorithm with the smallest elapsed time
    pub fastest: Algorithm,
}

impl ComparisonResult {
    /// Builds a comparison, picking the fastest result.
    ///
    /// Ties go to the earliest result. Returns `None` when `results` is empty.
    pub fn from_results(results: Vec<MatchResult>) -> Option<Self> {
        // min_by_key keeps the first of several equal minima
        let fastest = results.iter().min_by_key(|r| r.elapsed)?.algorithm;
        Some(Self { results, fastest })
    }
}

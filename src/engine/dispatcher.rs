//! Request dispatcher for the single-algorithm mode.
//!
//! Validates the submitted `(text, pattern, algorithm)` triple, resolves the
//! algorithm, runs it under the timing harness and attaches its complexity
//! labels.

use serde::Deserialize;
use tracing::debug;

use super::budget::StopSignal;
use super::complexity;
use super::result::MatchResult;
use super::timing::time_search;
use crate::config::limits::LimitsConfig;
use crate::error::{EngineError, EngineResult};
use crate::matchers::Algorithm;

/// A single-algorithm request as submitted by a client.
///
/// Fields are optional so that a missing field can be told apart from an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MatchRequest {
    /// Text to search in
    #[serde(default)]
    pub text: Option<String>,
    /// Pattern to search for
    #[serde(default)]
    pub pattern: Option<String>,
    /// Algorithm identifier
    #[serde(default)]
    pub algorithm: Option<String>,
}

impl MatchRequest {
    /// Creates a request with every field present.
    pub fn new(
        text: impl Into<String>,
        pattern: impl Into<String>,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            text: Some(text.into()),
            pattern: Some(pattern.into()),
            algorithm: Some(algorithm.into()),
        }
    }
}

/// Validates requests and runs a single algorithm.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    max_text_bytes: usize,
    max_pattern_bytes: usize,
}

impl Dispatcher {
    /// Creates a dispatcher enforcing the given limits.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            max_text_bytes: limits.max_text_bytes,
            max_pattern_bytes: limits.max_pattern_bytes,
        }
    }

    /// Checks that text and pattern are present and within limits.
    ///
    /// An empty string is a valid, present value.
    pub fn validate_inputs<'a>(
        &self,
        text: Option<&'a str>,
        pattern: Option<&'a str>,
    ) -> EngineResult<(&'a [u8], &'a [u8])> {
        let text = text.ok_or_else(|| EngineError::InvalidInput("text is required".to_string()))?;
        let pattern =
            pattern.ok_or_else(|| EngineError::InvalidInput("pattern is required".to_string()))?;

        if text.len() > self.max_text_bytes {
            return Err(EngineError::InputTooLarge {
                field: "text",
                len: text.len(),
                max: self.max_text_bytes,
            });
        }
        if pattern.len() > self.max_pattern_bytes {
            return Err(EngineError::InputTooLarge {
                field: "pattern",
                len: pattern.len(),
                max: self.max_pattern_bytes,
            });
        }

        Ok((text.as_bytes(), pattern.as_bytes()))
    }

    /// Resolves a submitted identifier against the closed set of algorithms.
    pub fn resolve_algorithm(&self, identifier: Option<&str>) -> EngineResult<Algorithm> {
        let identifier = identifier
            .ok_or_else(|| EngineError::InvalidAlgorithm("algorithm is required".to_string()))?;

        identifier.parse::<Algorithm>().map_err(|e| {
            let known: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::id).collect();
            EngineError::InvalidAlgorithm(format!("{e}; expected one of: {}", known.join(", ")))
        })
    }

    /// Validates `request` and runs the requested algorithm until it
    /// finishes or `signal` is raised.
    pub fn run(&self, request: &MatchRequest, signal: &StopSignal) -> EngineResult<MatchResult> {
        let algorithm = self.resolve_algorithm(request.algorithm.as_deref())?;
        let (text, pattern) =
            self.validate_inputs(request.text.as_deref(), request.pattern.as_deref())?;

        Self::execute(algorithm, text, pattern, signal)
    }

    /// Runs `algorithm` on already validated inputs.
    ///
    /// Fails with [`EngineError::ComputationTimeout`] if `signal` is raised
    /// before the search finishes.
    pub fn execute(
        algorithm: Algorithm,
        text: &[u8],
        pattern: &[u8],
        signal: &StopSignal,
    ) -> EngineResult<MatchResult> {
        let run = time_search(algorithm, text, pattern, signal.flag())
            .map_err(|_| signal.timeout_error())?;

        debug!(
            algorithm = %algorithm,
            text_len = text.len(),
            pattern_len = pattern.len(),
            matches = run.indices.len(),
            elapsed_ns = run.elapsed.as_nanos() as u64,
            "Search completed"
        );

        Ok(MatchResult {
            algorithm,
            indices: run.indices,
            elapsed: run.elapsed,
            complexity: complexity::lookup(algorithm),
        })
    }
}

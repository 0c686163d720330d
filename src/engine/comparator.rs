//! Comparator for the compare-all mode.
//!
//! Runs every algorithm against the same inputs, in canonical order, and
//! picks the fastest one. A raised [`StopSignal`] fails the whole
//! comparison; partial results are never reported.

use serde::Deserialize;
use tracing::debug;

use super::budget::StopSignal;
use super::dispatcher::Dispatcher;
use super::result::{ComparisonResult, MatchResult};
use crate::config::limits::{CompareMode, LimitsConfig};
use crate::error::{EngineError, EngineResult};
use crate::matchers::Algorithm;

/// A compare-all request as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompareRequest {
    /// Text to search in
    #[serde(default)]
    pub text: Option<String>,
    /// Pattern to search for
    #[serde(default)]
    pub pattern: Option<String>,
}

impl CompareRequest {
    /// Creates a request with both fields present.
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            pattern: Some(pattern.into()),
        }
    }
}

/// Runs every algorithm and reports comparative results.
#[derive(Debug, Clone)]
pub struct Comparator {
    dispatcher: Dispatcher,
    mode: CompareMode,
}

impl Comparator {
    /// Creates a comparator enforcing the given limits.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(limits),
            mode: limits.compare_mode,
        }
    }

    /// Validates `request` and runs every algorithm against it until they
    /// finish or `signal` is raised.
    pub fn run(
        &self,
        request: &CompareRequest,
        signal: &StopSignal,
    ) -> EngineResult<ComparisonResult> {
        let (text, pattern) = self
            .dispatcher
            .validate_inputs(request.text.as_deref(), request.pattern.as_deref())?;

        let results = match self.mode {
            CompareMode::Sequential => Self::run_sequential(text, pattern, signal)?,
            CompareMode::Parallel => Self::run_parallel(text, pattern, signal)?,
        };

        let comparison = ComparisonResult::from_results(results)
            .ok_or_else(|| EngineError::Internal("no algorithm produced a result".to_string()))?;

        debug!(fastest = %comparison.fastest, mode = ?self.mode, "Comparison completed");

        Ok(comparison)
    }

    fn run_sequential(
        text: &[u8],
        pattern: &[u8],
        signal: &StopSignal,
    ) -> EngineResult<Vec<MatchResult>> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                signal.check()?;
                Dispatcher::execute(algorithm, text, pattern, signal)
            })
            .collect()
    }

    /// Runs each algorithm on its own scoped thread; results keep canonical order.
    fn run_parallel(
        text: &[u8],
        pattern: &[u8],
        signal: &StopSignal,
    ) -> EngineResult<Vec<MatchResult>> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = Algorithm::ALL
                .iter()
                .map(|&algorithm| {
                    scope.spawn(move || Dispatcher::execute(algorithm, text, pattern, signal))
                })
                .collect();

            handles
                .into_iter()
                .zip(Algorithm::ALL)
                .map(|(handle, algorithm)| {
                    handle.join().map_err(|_| {
                        EngineError::Internal(format!("{algorithm} matcher thread panicked"))
                    })?
                })
                .collect()
        })
    }
}

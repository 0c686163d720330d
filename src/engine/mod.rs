//! The matching and benchmarking engine.
//!
//! [`MatchEngine`] is the entry point used by the HTTP surface and the CLI.
//! It owns a [`Dispatcher`] for single-algorithm requests and a
//! [`Comparator`] for compare-all requests, and runs both under the
//! configured computation budget.
//!
//! ```
//! use pono_match_lib::config::limits::LimitsConfig;
//! use pono_match_lib::engine::{MatchEngine, MatchRequest};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let engine = MatchEngine::new(&LimitsConfig::default());
//!
//! let result = runtime
//!     .block_on(engine.run_single(MatchRequest::new("AAAAAA", "AA", "kmp")))
//!     .unwrap();
//! assert_eq!(result.indices, vec![0, 1, 2, 3, 4]);
//! ```

pub mod budget;
pub mod comparator;
pub mod complexity;
pub mod dispatcher;
pub mod result;
pub mod timing;

use std::time::Duration;

pub use budget::StopSignal;
pub use comparator::{CompareRequest, Comparator};
pub use complexity::Complexity;
pub use dispatcher::{Dispatcher, MatchRequest};
pub use result::{ComparisonResult, MatchResult};

use crate::config::limits::LimitsConfig;
use crate::error::EngineResult;

/// Budgeted entry point to the dispatcher and the comparator.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    dispatcher: Dispatcher,
    comparator: Comparator,
    budget: Duration,
}

impl MatchEngine {
    /// Creates an engine from the configured limits.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(limits),
            comparator: Comparator::new(limits),
            budget: limits.computation_timeout(),
        }
    }

    /// Runs one algorithm within the budget.
    pub async fn run_single(&self, request: MatchRequest) -> EngineResult<MatchResult> {
        let dispatcher = self.dispatcher.clone();
        budget::run_with_budget(self.budget, move |signal| dispatcher.run(&request, signal)).await
    }

    /// Runs every algorithm within the budget.
    pub async fn compare_all(&self, request: CompareRequest) -> EngineResult<ComparisonResult> {
        let comparator = self.comparator.clone();
        budget::run_with_budget(self.budget, move |signal| comparator.run(&request, signal)).await
    }
}

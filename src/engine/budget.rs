//! Wall-clock budget for engine computations.
//!
//! Matchers are CPU-bound, so a computation runs on tokio's blocking pool
//! while the caller waits on it for at most the configured budget. When the
//! budget expires the caller gets [`EngineError::ComputationTimeout`] right
//! away and the job's [`StopSignal`] is raised. The matchers poll that signal
//! as they scan, so the abandoned job gives its blocking thread back shortly
//! after instead of running to completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Stop flag shared between a budgeted job and the caller waiting on it.
///
/// The default signal is never raised by anyone and carries a zero budget.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
    budget: Duration,
}

impl StopSignal {
    /// Creates a lowered signal for a job running under `budget`.
    pub fn new(budget: Duration) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            budget,
        }
    }

    /// Raises the signal.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether the signal has been raised.
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// The flag polled by the matchers.
    pub fn flag(&self) -> &AtomicBool {
        &self.flag
    }

    /// The error a job reports once it notices the signal.
    pub fn timeout_error(&self) -> EngineError {
        EngineError::ComputationTimeout(self.budget)
    }

    /// Fails with [`StopSignal::timeout_error`] if the signal is raised.
    pub fn check(&self) -> EngineResult<()> {
        if self.is_stopped() {
            Err(self.timeout_error())
        } else {
            Ok(())
        }
    }
}

/// Runs `job` on the blocking pool, waiting at most `budget` for it.
///
/// `job` receives the [`StopSignal`] that is raised when the budget expires
/// and should stop working once it observes it.
///
/// # Errors
///
/// * [`EngineError::ComputationTimeout`] when the budget expires
/// * [`EngineError::Internal`] when the job panics
/// * any error returned by `job` itself
pub async fn run_with_budget<T, F>(budget: Duration, job: F) -> EngineResult<T>
where
    F: FnOnce(&StopSignal) -> EngineResult<T> + Send + 'static,
    T: Send + 'static,
{
    let signal = StopSignal::new(budget);
    let job_signal = signal.clone();

    match tokio::time::timeout(budget, tokio::task::spawn_blocking(move || job(&job_signal))).await
    {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(EngineError::Internal(format!(
            "computation failed: {join_error}"
        ))),
        Err(_) => {
            signal.stop();
            warn!(budget_ms = budget.as_millis() as u64, "Computation exceeded its budget");
            Err(signal.timeout_error())
        }
    }
}

//! Timing harness.
//!
//! Measures a single matcher invocation with a monotonic clock. Only the
//! call to the search function sits between the two clock reads: input
//! validation, complexity lookup and serialization all happen outside.

use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use crate::matchers::{Algorithm, Interrupted};

/// Decimal places kept when reporting milliseconds.
const MS_DECIMALS: i32 = 6;

/// Output of one timed search.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedSearch {
    /// Match start offsets, ascending
    pub indices: Vec<usize>,
    /// Wall time spent inside the matcher
    pub elapsed: Duration,
}

/// Runs `algorithm` over `text` and measures how long it takes.
///
/// Fails with [`Interrupted`] if `stop` is set before the search finishes.
pub fn time_search(
    algorithm: Algorithm,
    text: &[u8],
    pattern: &[u8],
    stop: &AtomicBool,
) -> Result<TimedSearch, Interrupted> {
    let start = Instant::now();
    let indices = algorithm.search_until(text, pattern, stop)?;
    let elapsed = start.elapsed();

    Ok(TimedSearch { indices, elapsed })
}

/// Converts a duration to fractional milliseconds rounded to six decimals.
pub fn duration_to_ms(duration: Duration) -> f64 {
    let scale = 10f64.powi(MS_DECIMALS);
    let ms = duration.as_nanos() as f64 / 1_000_000.0;
    (ms * scale).round() / scale
}

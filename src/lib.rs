//! Pono Match Library
//!
//! This library contains the core components of the Pono Match service: four
//! exact string-matching algorithms, a timing and comparison engine built on
//! top of them, and the HTTP surface that exposes the engine to clients.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`matchers`]: pure byte-level search functions, one per algorithm
//! - [`engine`]: validation, dispatch, timing, complexity labels and the
//!   compare-all reduction, run under a wall-clock budget
//! - [`protocol`]: JSON over HTTP
//! - [`config`] and [`error`]: the layered configuration and error types
//!   shared by all of the above

pub mod config;
pub mod engine;
pub mod error;
pub mod matchers;
pub mod protocol;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use config::LogConfig;
use error::{PonoError, PonoResult};

/// Version information for the Pono Match service.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log.level`. The [`ErrorLayer`] is always
/// installed so that error reports can carry span traces.
pub fn init_logging(log: &LogConfig) -> PonoResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| PonoError::Custom(format!("Invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_thread_names(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_thread_names(true),
            )
            .try_init()
    };

    result.map_err(|e| PonoError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

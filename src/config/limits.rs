//! Engine limits configuration module.
//!
//! This module defines the bounds placed on a single match request: input
//! sizes, the wall-clock budget of a computation, and how the compare-all
//! mode schedules its matchers.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the compare-all mode runs its matchers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    /// One matcher after the other on the request's thread
    #[default]
    Sequential,
    /// One scoped thread per matcher
    Parallel,
}

/// Engine limits configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum text size in bytes
    pub max_text_bytes: usize,

    /// Maximum pattern size in bytes
    pub max_pattern_bytes: usize,

    /// Wall-clock budget of one request's computation in milliseconds
    pub computation_timeout_ms: u64,

    /// Scheduling of the compare-all mode
    pub compare_mode: CompareMode,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_text_bytes: 8 * 1024 * 1024, // 8 MiB
            max_pattern_bytes: 64 * 1024,    // 64 KiB
            computation_timeout_ms: 10_000,
            compare_mode: CompareMode::default(),
        }
    }
}

impl LimitsConfig {
    /// The computation budget as a [`Duration`].
    pub fn computation_timeout(&self) -> Duration {
        Duration::from_millis(self.computation_timeout_ms)
    }
}

impl Validate for LimitsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_text_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_text_bytes must be greater than 0".to_string(),
            ));
        }

        if self.max_pattern_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_pattern_bytes must be greater than 0".to_string(),
            ));
        }

        if self.max_pattern_bytes > self.max_text_bytes {
            return Err(ConfigError::ValueOutOfRange {
                key: "limits.max_pattern_bytes".to_string(),
                message: format!(
                    "must not exceed max_text_bytes ({})",
                    self.max_text_bytes
                ),
            });
        }

        if self.computation_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "computation_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

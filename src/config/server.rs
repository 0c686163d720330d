//! Server configuration module.
//!
//! This module defines configuration related to the HTTP server itself:
//! bind address, runtime worker threads and request body limits.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Default port, the one the web client is configured to call.
const DEFAULT_PORT: u16 = 5000;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// Address to bind the HTTP listener to
    pub address: SocketAddr,

    /// Number of runtime worker threads for request processing
    pub worker_threads: usize,

    /// Maximum request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "pono-match".to_string(),
            address: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            worker_threads: num_cpus::get(),
            max_body_bytes: 16 * 1024 * 1024, // 16 MiB
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_body_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

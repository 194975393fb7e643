//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_MEMO_CAPACITY;

/// Default HTTP server port
pub const DEFAULT_SERVER_PORT: u16 = 5440;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of memoized results kept before LRU eviction
    pub memo_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CAPACITY` - Memoized results kept (default: 10, minimum: 1)
    /// - `SERVER_PORT` - HTTP server port (default: 5440)
    pub fn from_env() -> Self {
        Self {
            memo_capacity: env::var("MEMO_CAPACITY")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(DEFAULT_MEMO_CAPACITY)
                .max(1),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memo_capacity: DEFAULT_MEMO_CAPACITY,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

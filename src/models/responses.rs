//! Response DTOs for the math store API
//!
//! Defines the structure of outgoing HTTP response bodies. Store failures are
//! reported in an `error` field; a non-empty `error` takes precedence over any
//! numeric value in the same response.

use serde::{Deserialize, Serialize};

use crate::cache::MemoStats;
use crate::error::MathError;

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetResponse {
    /// The key that was written
    pub key: String,
    /// Empty on success
    pub error: String,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            error: String::new(),
        }
    }

    pub fn failed(key: impl Into<String>, error: &MathError) -> Self {
        Self {
            key: key.into(),
            error: error.to_string(),
        }
    }
}

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value, 0 on failure
    #[serde(with = "super::number")]
    pub value: f64,
    /// Empty on success
    pub error: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
            error: String::new(),
        }
    }

    pub fn failed(key: impl Into<String>, error: &MathError) -> Self {
        Self {
            key: key.into(),
            value: 0.0,
            error: error.to_string(),
        }
    }
}

/// Response body for the binary operations (POST /add, /sub, /mult, /div)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryOpResponse {
    /// Result of the operation, 0 on failure. May be infinite on overflow.
    #[serde(with = "super::number")]
    pub value: f64,
    /// Whether the result was served from the memo table
    pub cache_hit: bool,
    /// Empty on success
    pub error: String,
}

impl BinaryOpResponse {
    pub fn new(value: f64, cache_hit: bool) -> Self {
        Self {
            value,
            cache_hit,
            error: String::new(),
        }
    }

    pub fn failed(error: &MathError) -> Self {
        Self {
            value: 0.0,
            cache_hit: false,
            error: error.to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Computations answered from the memo table
    pub hits: u64,
    /// Computations that had to be recomputed
    pub misses: u64,
    /// Memo entries evicted by LRU
    pub evictions: u64,
    /// Writes that cleared the memo table
    pub invalidations: u64,
    /// Current number of memoized results
    pub memo_entries: usize,
    /// Current number of stored keys
    pub stored_keys: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<MemoStats> for StatsResponse {
    fn from(stats: MemoStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            memo_entries: stats.memo_entries,
            stored_keys: stats.stored_keys,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

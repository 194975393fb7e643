//! Memo Statistics Module
//!
//! Tracks memo cache performance: hits, misses, evictions and invalidations.

use serde::Serialize;

// == Memo Stats ==
/// Tracks memo cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoStats {
    /// Computations answered from the memo table
    pub hits: u64,
    /// Successful computations that had to be recomputed
    pub misses: u64,
    /// Memo entries evicted by the LRU policy
    pub evictions: u64,
    /// Writes that cleared a non-empty memo table
    pub invalidations: u64,
    /// Current number of memoized results
    pub memo_entries: usize,
    /// Current number of stored keys
    pub stored_keys: usize,
}

impl MemoStats {
    // == Constructor ==
    /// Creates a new MemoStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the memo hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if nothing was computed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }
}

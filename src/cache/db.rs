//! Math Database Module
//!
//! Combines the store with its memo cache. The two are always mutated
//! together, so callers share one `MathDb` behind a single lock.

use tracing::debug;

use crate::cache::{MemoCache, MemoKey, MemoStats, OpKind, Store};
use crate::error::Result;

// == Math Database ==
/// Store of named values plus the memoized results computed from them.
#[derive(Debug)]
pub struct MathDb {
    /// Ground truth values
    store: Store,
    /// Memoized binary-operation results
    memo: MemoCache,
    /// Performance statistics
    stats: MemoStats,
}

impl MathDb {
    // == Constructor ==
    /// Creates an empty database whose memo table holds `memo_capacity` results.
    pub fn new(memo_capacity: usize) -> Self {
        Self {
            store: Store::new(),
            memo: MemoCache::new(memo_capacity),
            stats: MemoStats::new(),
        }
    }

    // == Write ==
    /// Sets or overwrites `key`, then clears every memoized result.
    ///
    /// The memo table does not track which keys a result depends on, so any
    /// write invalidates all of it.
    pub fn write(&mut self, key: String, value: f64) {
        self.store.write(key, value);

        let dropped = self.memo.invalidate();
        if dropped > 0 {
            self.stats.record_invalidation();
            debug!(dropped, "memo table invalidated");
        }
    }

    // == Read ==
    /// Returns the current value of `key`.
    pub fn read(&self, key: &str) -> Result<f64> {
        self.store.read(key)
    }

    // == Compute ==
    /// Evaluates `op(key_a, key_b)`, returning the result and whether it
    /// came from the memo table.
    ///
    /// A failed computation (missing key, division by zero) leaves the memo
    /// table untouched: nothing is inserted and nothing is evicted.
    pub fn compute(&mut self, op: OpKind, key_a: &str, key_b: &str) -> Result<(f64, bool)> {
        let memo_key = MemoKey::new(op, key_a, key_b);

        if let Some(value) = self.memo.get(&memo_key) {
            self.stats.record_hit();
            return Ok((value, true));
        }

        let a = self.store.read(key_a)?;
        let b = self.store.read(key_b)?;
        let value = op.apply(a, b, key_a, key_b)?;

        if self.memo.insert(memo_key, value).is_some() {
            self.stats.record_eviction();
        }
        self.stats.record_miss();

        Ok((value, false))
    }

    pub fn add(&mut self, key_a: &str, key_b: &str) -> Result<(f64, bool)> {
        self.compute(OpKind::Add, key_a, key_b)
    }

    pub fn sub(&mut self, key_a: &str, key_b: &str) -> Result<(f64, bool)> {
        self.compute(OpKind::Sub, key_a, key_b)
    }

    pub fn mult(&mut self, key_a: &str, key_b: &str) -> Result<(f64, bool)> {
        self.compute(OpKind::Mult, key_a, key_b)
    }

    pub fn div(&mut self, key_a: &str, key_b: &str) -> Result<(f64, bool)> {
        self.compute(OpKind::Div, key_a, key_b)
    }

    // == Is Memoized ==
    /// Checks whether `op(key_a, key_b)` is memoized, without touching recency.
    pub fn is_memoized(&self, op: OpKind, key_a: &str, key_b: &str) -> bool {
        self.memo.contains(&MemoKey::new(op, key_a, key_b))
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> MemoStats {
        let mut stats = self.stats.clone();
        stats.memo_entries = self.memo.len();
        stats.stored_keys = self.store.len();
        stats
    }
}

impl Default for MathDb {
    fn default() -> Self {
        Self::new(crate::cache::DEFAULT_MEMO_CAPACITY)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;

    fn db_with(values: &[(&str, f64)]) -> MathDb {
        let mut db = MathDb::default();
        for (key, value) in values {
            db.write(key.to_string(), *value);
        }
        db
    }

    #[test]
    fn test_write_then_read() {
        let db = db_with(&[("a", 2.0)]);
        assert_eq!(db.read("a").unwrap(), 2.0);
    }

    #[test]
    fn test_read_unknown_key() {
        let db = MathDb::default();
        assert_eq!(db.read("x"), Err(MathError::KeyNotFound("x".to_string())));
    }

    #[test]
    fn test_cache_hit_on_repeat() {
        let mut db = db_with(&[("a", 2.0), ("b", 3.0)]);

        assert_eq!(db.add("a", "b").unwrap(), (5.0, false));
        assert_eq!(db.add("a", "b").unwrap(), (5.0, true));
    }

    #[test]
    fn test_invalidation_on_write() {
        let mut db = db_with(&[("a", 2.0), ("b", 3.0)]);
        db.add("a", "b").unwrap();
        db.add("a", "b").unwrap();

        db.write("a".to_string(), 10.0);
        assert_eq!(db.memo_len(), 0);
        assert_eq!(db.add("a", "b").unwrap(), (13.0, false));
    }

    #[test]
    fn test_write_to_unrelated_key_still_invalidates() {
        let mut db = db_with(&[("a", 2.0), ("b", 3.0)]);
        db.mult("a", "b").unwrap();

        db.write("unrelated".to_string(), 0.0);
        assert_eq!(db.mult("a", "b").unwrap(), (6.0, false));
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut db = MathDb::default();
        for n in 0..11 {
            db.write(format!("k{}", n), n as f64);
        }
        db.write("one".to_string(), 1.0);

        for n in 0..11 {
            let (_, hit) = db.add(&format!("k{}", n), "one").unwrap();
            assert!(!hit);
        }
        assert_eq!(db.memo_len(), 10);
        assert!(!db.is_memoized(OpKind::Add, "k0", "one"));

        for n in 1..11 {
            let (value, hit) = db.add(&format!("k{}", n), "one").unwrap();
            assert!(hit, "k{} should still be memoized", n);
            assert_eq!(value, n as f64 + 1.0);
        }
        let (_, hit) = db.add("k0", "one").unwrap();
        assert!(!hit);
    }

    #[test]
    fn test_lru_promotion() {
        let mut db = db_with(&[("x", 1.0)]);
        for n in 0..10 {
            db.write(format!("k{}", n), n as f64);
        }

        // 10 distinct entries fill the table, k0 is the oldest
        for n in 0..10 {
            db.sub(&format!("k{}", n), "x").unwrap();
        }
        // Re-access the oldest, then insert one more
        assert!(db.sub("k0", "x").unwrap().1);
        db.sub("x", "k0").unwrap();

        assert!(db.is_memoized(OpKind::Sub, "k0", "x"));
        assert!(!db.is_memoized(OpKind::Sub, "k1", "x"));
        assert_eq!(db.memo_len(), 10);
    }

    #[test]
    fn test_divide_by_zero_leaves_memo_unchanged() {
        let mut db = db_with(&[("a", 1.0), ("z", 0.0)]);
        db.add("a", "z").unwrap();

        let result = db.div("a", "z");
        assert!(matches!(result, Err(MathError::DivideByZero { .. })));
        assert_eq!(db.memo_len(), 1);
        assert!(!db.is_memoized(OpKind::Div, "a", "z"));

        // Still a failure the second time, never a hit
        assert!(db.div("a", "z").is_err());
    }

    #[test]
    fn test_missing_operand_does_not_evict() {
        let mut db = MathDb::new(2);
        db.write("a".to_string(), 1.0);
        db.write("b".to_string(), 2.0);
        db.add("a", "b").unwrap();
        db.sub("a", "b").unwrap();

        let result = db.mult("a", "missing");
        assert_eq!(result, Err(MathError::KeyNotFound("missing".to_string())));
        assert!(db.is_memoized(OpKind::Add, "a", "b"));
        assert!(db.is_memoized(OpKind::Sub, "a", "b"));
        assert_eq!(db.stats().evictions, 0);
    }

    #[test]
    fn test_operand_order_sensitivity() {
        let mut db = db_with(&[("a", 7.0), ("b", 2.0)]);

        assert_eq!(db.sub("a", "b").unwrap(), (5.0, false));
        assert_eq!(db.sub("b", "a").unwrap(), (-5.0, false));
        assert_eq!(db.memo_len(), 2);

        // Commutative operations are not normalized either
        db.add("a", "b").unwrap();
        assert_eq!(db.add("b", "a").unwrap(), (9.0, false));
    }

    #[test]
    fn test_same_key_both_operands() {
        let mut db = db_with(&[("a", 3.0)]);
        assert_eq!(db.mult("a", "a").unwrap(), (9.0, false));
        assert_eq!(db.div("a", "a").unwrap(), (1.0, false));
    }

    #[test]
    fn test_stats() {
        let mut db = MathDb::new(1);
        db.write("a".to_string(), 4.0);
        db.write("b".to_string(), 2.0);

        db.div("a", "b").unwrap(); // miss
        db.div("a", "b").unwrap(); // hit
        db.mult("a", "b").unwrap(); // miss, evicts div
        let _ = db.add("a", "nope"); // failure, not counted
        db.write("a".to_string(), 1.0); // invalidates

        let stats = db.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.memo_entries, 0);
        assert_eq!(stats.stored_keys, 2);
    }
}

//! Memo Cache Module
//!
//! Bounded LRU table of binary-operation results keyed by
//! (operation, left key, right key).

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{LruTracker, OpKind};

// == Memo Key ==
/// Composite key of a memoized computation.
///
/// Operands are not normalized: `add(a, b)` and `add(b, a)` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub op: OpKind,
    pub key_a: String,
    pub key_b: String,
}

impl MemoKey {
    pub fn new(op: OpKind, key_a: impl Into<String>, key_b: impl Into<String>) -> Self {
        Self {
            op,
            key_a: key_a.into(),
            key_b: key_b.into(),
        }
    }
}

// == Memo Cache ==
/// Fixed-capacity memo table with strict LRU eviction.
///
/// Both hits and insertions count as an access. Size never exceeds capacity.
#[derive(Debug)]
pub struct MemoCache {
    /// Memoized results
    results: HashMap<MemoKey, f64>,
    /// Access order of memoized keys
    lru: LruTracker<MemoKey>,
    /// Maximum number of memoized results
    capacity: usize,
}

impl MemoCache {
    // == Constructor ==
    /// Creates an empty memo cache. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            results: HashMap::with_capacity(capacity),
            lru: LruTracker::new(),
            capacity,
        }
    }

    // == Get ==
    /// Returns a memoized result and marks it most recently used.
    pub fn get(&mut self, key: &MemoKey) -> Option<f64> {
        let value = self.results.get(key).copied()?;
        self.lru.touch(key);
        Some(value)
    }

    // == Insert ==
    /// Memoizes a result as most recently used.
    ///
    /// When a new key would overflow the capacity, exactly one least
    /// recently used entry is evicted first and returned.
    pub fn insert(&mut self, key: MemoKey, value: f64) -> Option<MemoKey> {
        let mut evicted = None;

        if !self.results.contains_key(&key) && self.results.len() >= self.capacity {
            if let Some(oldest) = self.lru.evict_oldest() {
                self.results.remove(&oldest);
                debug!(op = %oldest.op, key_a = %oldest.key_a, key_b = %oldest.key_b, "memo entry evicted");
                evicted = Some(oldest);
            }
        }

        self.lru.touch(&key);
        self.results.insert(key, value);
        debug_assert_eq!(self.lru.len(), self.results.len());
        evicted
    }

    // == Invalidate ==
    /// Drops every memoized result. Returns how many were dropped.
    pub fn invalidate(&mut self) -> usize {
        let dropped = self.results.len();
        self.results.clear();
        self.lru.clear();
        dropped
    }

    // == Contains ==
    /// Checks for a memoized result without touching recency.
    pub fn contains(&self, key: &MemoKey) -> bool {
        self.results.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: usize) -> MemoKey {
        MemoKey::new(OpKind::Add, format!("a{}", n), "b")
    }

    #[test]
    fn test_memo_miss_then_hit() {
        let mut memo = MemoCache::new(3);
        assert_eq!(memo.get(&key(0)), None);

        memo.insert(key(0), 1.5);
        assert_eq!(memo.get(&key(0)), Some(1.5));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_memo_evicts_one_at_capacity() {
        let mut memo = MemoCache::new(3);
        for n in 0..3 {
            assert_eq!(memo.insert(key(n), n as f64), None);
        }

        let evicted = memo.insert(key(3), 3.0);
        assert_eq!(evicted, Some(key(0)));
        assert_eq!(memo.len(), 3);
        assert!(!memo.contains(&key(0)));
        assert!(memo.contains(&key(3)));
    }

    #[test]
    fn test_memo_hit_promotes() {
        let mut memo = MemoCache::new(3);
        for n in 0..3 {
            memo.insert(key(n), n as f64);
        }

        // key(0) becomes most recent, key(1) is now the oldest
        memo.get(&key(0));
        let evicted = memo.insert(key(3), 3.0);

        assert_eq!(evicted, Some(key(1)));
        assert!(memo.contains(&key(0)));
    }

    #[test]
    fn test_memo_contains_does_not_promote() {
        let mut memo = MemoCache::new(2);
        memo.insert(key(0), 0.0);
        memo.insert(key(1), 1.0);

        assert!(memo.contains(&key(0)));
        assert_eq!(memo.insert(key(2), 2.0), Some(key(0)));
    }

    #[test]
    fn test_memo_reinsert_existing_does_not_evict() {
        let mut memo = MemoCache::new(2);
        memo.insert(key(0), 0.0);
        memo.insert(key(1), 1.0);

        assert_eq!(memo.insert(key(0), 9.0), None);
        assert_eq!(memo.len(), 2);
        assert_eq!(memo.get(&key(0)), Some(9.0));
    }

    #[test]
    fn test_memo_invalidate() {
        let mut memo = MemoCache::new(4);
        memo.insert(key(0), 0.0);
        memo.insert(key(1), 1.0);

        assert_eq!(memo.invalidate(), 2);
        assert!(memo.is_empty());
        assert_eq!(memo.get(&key(0)), None);
        assert_eq!(memo.invalidate(), 0);
    }

    #[test]
    fn test_memo_operand_order_is_distinct() {
        let mut memo = MemoCache::new(4);
        memo.insert(MemoKey::new(OpKind::Add, "a", "b"), 5.0);

        assert!(!memo.contains(&MemoKey::new(OpKind::Add, "b", "a")));
        assert!(!memo.contains(&MemoKey::new(OpKind::Mult, "a", "b")));
    }

    #[test]
    fn test_memo_zero_capacity_is_raised() {
        let mut memo = MemoCache::new(0);
        assert_eq!(memo.capacity(), 1);

        memo.insert(key(0), 0.0);
        memo.insert(key(1), 1.0);
        assert_eq!(memo.len(), 1);
        assert!(memo.contains(&key(1)));
    }
}

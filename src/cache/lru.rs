//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for memo eviction.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps the key with a monotonically increasing tick, so
/// recency is a total order with no ties:
/// - Highest tick = Most recently used
/// - Lowest tick = Least recently used
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Current tick of each tracked key
    ticks: HashMap<K, u64>,
    /// Keys ordered by tick
    order: BTreeMap<u64, K>,
    /// Next tick to hand out
    clock: u64,
}

impl<K: Eq + Hash + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            ticks: HashMap::new(),
            order: BTreeMap::new(),
            clock: 0,
        }
    }

    // == Touch ==
    /// Marks a key as most recently used, tracking it if new.
    pub fn touch(&mut self, key: &K) {
        let tick = self.clock;
        self.clock += 1;

        if let Some(old) = self.ticks.insert(key.clone(), tick) {
            self.order.remove(&old);
        }
        self.order.insert(tick, key.clone());
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        let (_, key) = self.order.pop_first()?;
        self.ticks.remove(&key);
        Some(key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.ticks.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }
}

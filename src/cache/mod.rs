//! Cache Module
//!
//! Provides the numeric store and its bounded memoization cache.

mod db;
mod lru;
mod memo;
mod op;
mod stats;
mod store;


use lru::LruTracker;

// Re-export public types
pub use db::MathDb;
pub use memo::{MemoCache, MemoKey};
pub use op::OpKind;
pub use stats::MemoStats;
pub use store::Store;

// == Public Constants ==
/// Default number of memoized results kept before LRU eviction
pub const DEFAULT_MEMO_CAPACITY: usize = 10;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

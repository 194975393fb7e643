//! MathDB - An in-memory numeric store with memoized arithmetic
//!
//! Stores named scalar values and memoizes binary operations over them in a
//! bounded LRU table that is cleared whenever any value changes.

pub mod api;
pub mod cache;
pub mod config;
pub mod driver;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::MathDb;
pub use config::Config;
pub use error::MathError;

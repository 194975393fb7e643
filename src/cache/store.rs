//! Store Module
//!
//! The authoritative key to value mapping of scalar numbers.

use std::collections::HashMap;

use crate::error::{MathError, Result};

// == Store ==
/// Named scalar values. A key either holds exactly one value or is absent.
#[derive(Debug, Default)]
pub struct Store {
    values: HashMap<String, f64>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // == Write ==
    /// Sets or overwrites the value for `key`.
    ///
    /// Returns true if the key already existed.
    pub fn write(&mut self, key: String, value: f64) -> bool {
        self.values.insert(key, value).is_some()
    }

    // == Read ==
    /// Returns the current value of `key`.
    pub fn read(&self, key: &str) -> Result<f64> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| MathError::KeyNotFound(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

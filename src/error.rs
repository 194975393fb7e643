//! Error types for the math store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Math Error Enum ==
/// Unified error type for store, memo cache and request validation failures.
///
/// Every variant is a per-call failure: the operation that produced it
/// leaves the store and the memo table exactly as they were.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Referenced key was never written
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Right operand of a division resolved to zero
    #[error("Division by zero: {key_a} / {key_b}")]
    DivideByZero { key_a: String, key_b: String },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == Result Type Alias ==
/// Convenience Result type for the math store.
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MathError::KeyNotFound("x".to_string()).to_string(),
            "Key not found: x"
        );
        let err = MathError::DivideByZero {
            key_a: "a".to_string(),
            key_b: "z".to_string(),
        };
        assert_eq!(err.to_string(), "Division by zero: a / z");
    }
}

//! Request DTOs for the math store API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Serialize};

use crate::cache::MAX_KEY_LENGTH;

/// Request body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRequest {
    /// The key to write
    pub key: String,
    /// The value to store
    pub value: f64,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_key(&self.key) {
            return Some(error);
        }
        if !self.value.is_finite() {
            return Some("Value must be a finite number".to_string());
        }
        None
    }
}

/// Request body for the binary operations (POST /add, /sub, /mult, /div)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryOpRequest {
    /// Left operand key
    pub key_a: String,
    /// Right operand key
    pub key_b: String,
}

impl BinaryOpRequest {
    pub fn new(key_a: impl Into<String>, key_b: impl Into<String>) -> Self {
        Self {
            key_a: key_a.into(),
            key_b: key_b.into(),
        }
    }

    /// Validates both operand keys
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key_a).or_else(|| validate_key(&self.key_b))
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "a", "value": 2.5}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "a");
        assert_eq!(req.value, 2.5);
    }

    #[test]
    fn test_set_request_integer_value() {
        let req: SetRequest = serde_json::from_str(r#"{"key": "a", "value": 3}"#).unwrap();
        assert_eq!(req.value, 3.0);
    }

    #[test]
    fn test_set_request_rejects_string_value() {
        let result = serde_json::from_str::<SetRequest>(r#"{"key": "a", "value": "3"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: 1.0,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_non_finite_value() {
        let req = SetRequest {
            key: "a".to_string(),
            value: f64::NAN,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_binary_op() {
        assert!(BinaryOpRequest::new("a", "b").validate().is_none());
        assert!(BinaryOpRequest::new("a", "").validate().is_some());
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);
        assert!(BinaryOpRequest::new(long_key, "b").validate().is_some());
    }
}

//! Operation Kind Module
//!
//! The four binary arithmetic operations the memo cache can serve.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};

// == Op Kind ==
/// A binary arithmetic operation. The left key is always the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Add,
    Sub,
    Mult,
    Div,
}

impl OpKind {
    /// All operation kinds, in declaration order.
    pub const ALL: [OpKind; 4] = [OpKind::Add, OpKind::Sub, OpKind::Mult, OpKind::Div];

    // == Name ==
    /// Wire name of the operation (also its route segment).
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Sub => "sub",
            OpKind::Mult => "mult",
            OpKind::Div => "div",
        }
    }

    // == Apply ==
    /// Applies the operation to two resolved operands.
    ///
    /// The key names are only used to describe a division by zero.
    pub fn apply(self, a: f64, b: f64, key_a: &str, key_b: &str) -> Result<f64> {
        match self {
            OpKind::Add => Ok(a + b),
            OpKind::Sub => Ok(a - b),
            OpKind::Mult => Ok(a * b),
            OpKind::Div => {
                if b == 0.0 {
                    Err(MathError::DivideByZero {
                        key_a: key_a.to_string(),
                        key_b: key_b.to_string(),
                    })
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpKind {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        OpKind::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| MathError::InvalidRequest(format!("Unknown operation: {}", s)))
    }
}

//! Driver Commands
//!
//! Parses one comma-separated command row.

use std::str::FromStr;

use crate::cache::OpKind;
use crate::error::{MathError, Result};

// == Command ==
/// One row of a command file.
///
/// # Row formats
/// - `set,<key>,<value>`
/// - `get,<key>`
/// - `add|sub|mult|div,<key_a>,<key_b>`
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { key: String, value: f64 },
    Get { key: String },
    Binary { op: OpKind, key_a: String, key_b: String },
}

impl FromStr for Command {
    type Err = MathError;

    fn from_str(row: &str) -> Result<Self> {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        let (name, args) = fields
            .split_first()
            .ok_or_else(|| MathError::InvalidRequest("Empty row".to_string()))?;

        match (*name, args) {
            ("set", [key, value]) => {
                let value = value.parse::<f64>().map_err(|_| {
                    MathError::InvalidRequest(format!("Value is not a number: {}", value))
                })?;
                Ok(Command::Set {
                    key: key.to_string(),
                    value,
                })
            }
            ("get", [key]) => Ok(Command::Get {
                key: key.to_string(),
            }),
            ("set" | "get", _) => Err(MathError::InvalidRequest(format!(
                "Wrong number of arguments for {}: {}",
                name, row
            ))),
            (name, args) => {
                let op: OpKind = name.parse()?;
                match args {
                    [key_a, key_b] => Ok(Command::Binary {
                        op,
                        key_a: key_a.to_string(),
                        key_b: key_b.to_string(),
                    }),
                    _ => Err(MathError::InvalidRequest(format!(
                        "Wrong number of arguments for {}: {}",
                        op, row
                    ))),
                }
            }
        }
    }
}

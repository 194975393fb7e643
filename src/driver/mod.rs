//! Driver Module
//!
//! Client side of the math store: replays command files against a running
//! server from several concurrent streams and reports the memo hit rate.

mod client;
mod command;
mod replay;

pub use client::MathDbClient;
pub use command::Command;
pub use replay::{replay_files, replay_stream, Tally};

/// Default server address used by the driver
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:5440";

//! Command Replay
//!
//! Replays command files against a server, one concurrent stream per file,
//! and tallies memo hits from the binary-operation responses.

use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::driver::{Command, MathDbClient};

// == Tally ==
/// Outcome counts of one or more replayed streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Binary operations answered from the memo table
    pub hits: u64,
    /// Binary operations that were recomputed
    pub misses: u64,
    /// Requests that failed, in transport or with a non-empty error field
    pub failures: u64,
    /// Rows that could not be parsed
    pub skipped: u64,
}

impl Tally {
    /// Returns hits / (hits + misses), or 0.0 if no operation succeeded.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.hits += other.hits;
        self.misses += other.misses;
        self.failures += other.failures;
        self.skipped += other.skipped;
    }
}

// == Replay Stream ==
/// Replays every row of `contents` in order through `client`.
///
/// Malformed rows and failed requests are logged and counted; they never
/// stop the stream.
pub async fn replay_stream(client: &MathDbClient, name: &str, contents: &str) -> Tally {
    let mut tally = Tally::default();

    for (line_no, row) in contents.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }

        let command = match row.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!("{}:{}: skipping row: {}", name, line_no + 1, err);
                tally.skipped += 1;
                continue;
            }
        };

        let error = match command {
            Command::Set { key, value } => match client.set(&key, value).await {
                Ok(response) => response.error,
                Err(err) => format!("{:#}", err),
            },
            Command::Get { key } => match client.get(&key).await {
                Ok(response) => response.error,
                Err(err) => format!("{:#}", err),
            },
            Command::Binary { op, key_a, key_b } => match client.binary(op, &key_a, &key_b).await {
                Ok(response) if response.error.is_empty() => {
                    if response.cache_hit {
                        tally.hits += 1;
                    } else {
                        tally.misses += 1;
                    }
                    String::new()
                }
                Ok(response) => response.error,
                Err(err) => format!("{:#}", err),
            },
        };

        if !error.is_empty() {
            debug!("{}:{}: request failed: {}", name, line_no + 1, error);
            tally.failures += 1;
        }
    }

    tally
}

// == Replay Files ==
/// Replays each file on its own task and sums the tallies.
///
/// All files are read up front, so an unreadable file fails the run before
/// any request is sent.
pub async fn replay_files(client: &MathDbClient, files: &[PathBuf]) -> Result<Tally> {
    let mut streams = Vec::with_capacity(files.len());
    for path in files {
        streams.push((display_name(path), read_file(path).await?));
    }

    let handles: Vec<_> = streams
        .into_iter()
        .map(|(name, contents)| {
            let client = client.clone();
            tokio::spawn(async move {
                let tally = replay_stream(&client, &name, &contents).await;
                info!(
                    "{}: {} hits, {} misses, {} failures, {} skipped",
                    name, tally.hits, tally.misses, tally.failures, tally.skipped
                );
                tally
            })
        })
        .collect();

    let mut total = Tally::default();
    for handle in handles {
        total += handle.await.context("replay task panicked")?;
    }
    Ok(total)
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

//! mathdb-driver — replays command files against a math store server
//!
//! Each file runs as its own concurrent stream. Prints the aggregate memo
//! hit rate when every stream has finished.

use std::path::PathBuf;

use clap::Parser;
use mathdb::driver::{replay_files, MathDbClient, DEFAULT_ADDRESS};

/// Math store command replayer
#[derive(Parser)]
#[command(name = "mathdb-driver")]
#[command(about = "Replay command files against a math store server")]
struct Args {
    /// Server address
    #[arg(short, long, env = "MATHDB_ADDRESS", default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Command files, one concurrent stream each
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = MathDbClient::new(args.address);

    let tally = replay_files(&client, &args.files).await?;
    println!("{}", tally.hit_rate());

    Ok(())
}

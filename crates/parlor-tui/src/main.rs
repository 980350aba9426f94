//! Parlor TUI entry point.

use std::time::Duration;

use clap::Parser;
use parlor_tui::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Parlor terminal messenger
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Terminal UI for the parlor messenger")]
#[command(version)]
struct Args {
    /// Tick interval in milliseconds
    #[arg(long, default_value_t = 250)]
    tick_rate: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runtime = Runtime::new(Duration::from_millis(args.tick_rate))?;
    Ok(runtime.run().await?)
}

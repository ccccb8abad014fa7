//! sculpt - procedural sculpture generator
//!
//! Grows corals or revolves vessels and writes them as ASCII STL.

use anyhow::Result;
use clap::Parser;
use sculpt_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = sculpt_cli::run(cli)?;
    println!("Wrote {}", path.display());
    Ok(())
}

//! stackfold-demo - a worked example of the stackfold library.
//!
//! Run with: cargo run -p stackfold-demo -- [walkthrough|stack|words|sum]

mod cli;
mod report;
mod scenario;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let outcomes = scenario::run(&cli.command())?;
    print!("{}", report::render(&outcomes, cli.output)?);
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! javadoc-cleanup - GitHub action entry point
//!
//! Usage: `javadoc-cleanup <ROOT> <BASE_URL> <EXTRA_BLOCK>`
//!
//! Prints the number of modified pages as a step output.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

/// Main entry point for the javadoc-cleanup CLI application
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options();

    let summary = javadoc_cleanup::walk(&cli.root, &options)
        .with_context(|| format!("Failed to clean up javadocs in {}", cli.root.display()))?;

    println!("::set-output name=modified-count::{}", summary.modified);

    Ok(())
}

//! Solidafy Paginator CLI
//!
//! Command-line interface for inspecting pagination of a collection

use clap::Parser;
use solidafy_paginator::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging (RUST_LOG directives win over --log-level)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::from(cli.log_level).into())
                .from_env_lossy(),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

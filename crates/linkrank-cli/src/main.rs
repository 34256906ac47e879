//! Linkrank CLI
//!
//! Estimate PageRank for a corpus of HTML pages by sampling and by iteration.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    commands::rank::run(&cli)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LinkRankError>()
        .map(LinkRankError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}

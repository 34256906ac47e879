//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank a directory of linked HTML pages with PageRank"
)]
pub struct Cli {
    /// Directory of HTML pages
    #[arg(value_parser = parse_corpus_dir)]
    pub corpus: PathBuf,

    /// Damping factor in (0, 1)
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random-surfer samples
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for the sampling estimator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum sweeps for the iterative estimator
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Glob pattern for pages, relative to the corpus directory
    #[arg(long)]
    pub pattern: Option<String>,

    /// Include pages in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Config file (defaults to $LINKRANK_CONFIG or the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}

fn parse_corpus_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("'{}' is not a directory", value))
    }
}

//! Linkrank Core Library
//!
//! PageRank estimation over a corpus of linked HTML pages.
//!
//! # Features
//! - Corpus crawling with dangling-link pruning
//! - Random-surfer transition model
//! - Sampling estimator (seedable random walk)
//! - Iterative estimator with a convergence cap

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::{Config, CrawlConfig, RankConfig};
pub use error::{LinkRankError, Error, Result};
pub use graph::{crawl, extract_links, CrawlOptions, LinkGraph, Page};
pub use rank::{
    iterate_pagerank, iterate_with_config, sample_pagerank, sample_with_config, transition_model,
    weighted_choice, Distribution, IterationReport, IterativeRank, RankTable,
    CONVERGENCE_THRESHOLD,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";

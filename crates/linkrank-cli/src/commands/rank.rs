//! Rank command: crawl the corpus and run both estimators

use crate::app::Cli;
use crate::output::{self, RankReport};
use anyhow::{Context, Result};
use linkrank_core::{
    crawl, iterate_with_config, sample_with_config, Config, CrawlOptions, LinkGraph,
};

pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    config.rank.validate()?;

    let graph = crawl(&cli.corpus, &CrawlOptions::from(&config.crawl))
        .with_context(|| format!("Failed to crawl {}", cli.corpus.display()))?;

    let report = rank(&graph, &config)?;
    print!("{}", output::format_report(&report, cli.format));

    Ok(())
}

/// Layer CLI flags over the config file
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load()?,
    };

    if let Some(damping) = cli.damping {
        config.rank.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.rank.samples = samples;
    }
    if let Some(seed) = cli.seed {
        config.rank.seed = Some(seed);
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.rank.max_iterations = max_iterations;
    }
    if let Some(pattern) = &cli.pattern {
        config.crawl.pattern = pattern.clone();
    }
    if cli.recursive {
        config.crawl.recursive = true;
    }

    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

fn rank(graph: &LinkGraph, config: &Config) -> Result<RankReport> {
    let sampled = sample_with_config(graph, &config.rank)?;
    let iterated = iterate_with_config(graph, &config.rank)?;
    tracing::info!("Iterative estimator converged in {} sweeps", iterated.iterations);

    Ok(RankReport {
        damping: config.rank.damping,
        samples: config.rank.samples,
        sampled,
        iterated,
    })
}

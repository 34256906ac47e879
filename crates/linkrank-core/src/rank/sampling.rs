//! Random-surfer sampling estimator

use super::{transition_model, weighted_choice, RankTable};
use crate::config::{validate_damping, RankConfig};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Estimate PageRank by walking `samples` steps of the random-surfer model.
///
/// The walk starts on a uniformly random page. Each page's rank is the
/// fraction of steps spent on it, so the ranks sum to exactly 1.
pub fn sample_pagerank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankTable> {
    validate_damping(damping)?;
    if samples < 1 {
        return Err(LinkRankError::InvalidArgument(
            "sample count must be at least 1".to_string(),
        ));
    }
    if graph.is_empty() {
        return Err(LinkRankError::EmptyGraph);
    }

    let pages: Vec<&str> = graph.pages().collect();
    let mut visits = vec![0usize; pages.len()];
    // Next-page weights per page index, in page order
    let mut models: Vec<Option<Vec<f64>>> = vec![None; pages.len()];

    let mut current = rng.gen_range(0..pages.len());

    for _ in 0..samples {
        visits[current] += 1;

        if models[current].is_none() {
            let model = transition_model(graph, pages[current], damping)?;
            models[current] = Some(model.iter().map(|(_, p)| p).collect());
        }
        let weights = models[current].as_deref().unwrap_or_default();

        current = weighted_choice(weights.iter().copied().enumerate(), rng)
            .ok_or(LinkRankError::EmptyGraph)?;
    }

    let ranks = pages
        .iter()
        .zip(visits)
        .map(|(page, count)| (page.to_string(), count as f64 / samples as f64))
        .collect();

    Ok(RankTable::new(ranks))
}

/// Run the sampling estimator with the parameters of `config`.
///
/// Uses `config.seed` when set, otherwise seeds from system entropy.
pub fn sample_with_config(graph: &LinkGraph, config: &RankConfig) -> Result<RankTable> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    tracing::debug!(
        "Sampling {} steps over {} pages (damping {}, seed {:?})",
        config.samples,
        graph.len(),
        config.damping,
        config.seed
    );
    sample_pagerank(graph, config.damping, config.samples, &mut rng)
}

//! Random-surfer transition model

use super::Distribution;
use crate::config::validate_damping;
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use std::collections::BTreeMap;

/// Probability distribution over the next page a random surfer visits from `page`.
///
/// With probability `damping` the surfer follows one of the page's links
/// uniformly at random; otherwise it jumps to any page uniformly. A sink
/// page jumps uniformly with probability 1.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;

    let links = graph
        .links(page)
        .ok_or_else(|| LinkRankError::InvalidPage(page.to_string()))?;

    let n = graph.len() as f64;

    let probabilities: BTreeMap<String, f64> = if links.is_empty() {
        graph.pages().map(|p| (p.to_string(), 1.0 / n)).collect()
    } else {
        let teleport = (1.0 - damping) / n;
        let follow = damping / links.len() as f64;
        graph
            .pages()
            .map(|p| {
                let mut prob = teleport;
                if links.contains(p) {
                    prob += follow;
                }
                (p.to_string(), prob)
            })
            .collect()
    };

    Ok(Distribution::new(probabilities))
}

//! Iterative PageRank estimator
//!
//! Repeats full sweeps of the PageRank update rule until no page moves by
//! more than [`CONVERGENCE_THRESHOLD`] in a single sweep.

use super::RankTable;
use crate::config::{validate_damping, RankConfig, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use std::collections::HashMap;

/// Largest per-page change allowed in the final sweep
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Outcome of a converged run
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub ranks: RankTable,
    /// Number of sweeps performed, including the converging one
    pub iterations: usize,
    /// Largest per-page change in the final sweep
    pub delta: f64,
}

/// Fixed-point PageRank iteration
#[derive(Debug, Clone)]
pub struct IterativeRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Sweeps allowed before giving up with `NotConverged`
    pub max_iterations: usize,
}

impl Default for IterativeRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl From<&RankConfig> for IterativeRank {
    fn from(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
        }
    }
}

impl IterativeRank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Iterate from the uniform table (1/N per page)
    pub fn run(&self, graph: &LinkGraph) -> Result<IterationReport> {
        if graph.is_empty() {
            return Err(LinkRankError::EmptyGraph);
        }
        let uniform = 1.0 / graph.len() as f64;
        self.iterate(graph, vec![uniform; graph.len()])
    }

    /// Iterate from a caller-supplied table covering exactly the graph's pages
    pub fn run_from(&self, graph: &LinkGraph, initial: &RankTable) -> Result<IterationReport> {
        if graph.is_empty() {
            return Err(LinkRankError::EmptyGraph);
        }
        if initial.len() != graph.len() {
            return Err(LinkRankError::InvalidArgument(format!(
                "initial rank table has {} pages, graph has {}",
                initial.len(),
                graph.len()
            )));
        }
        let scores = graph
            .pages()
            .map(|page| {
                initial
                    .get(page)
                    .ok_or_else(|| LinkRankError::InvalidPage(page.to_string()))
            })
            .collect::<Result<Vec<f64>>>()?;
        self.iterate(graph, scores)
    }

    fn iterate(&self, graph: &LinkGraph, mut scores: Vec<f64>) -> Result<IterationReport> {
        validate_damping(self.damping)?;

        let pages: Vec<&str> = graph.pages().collect();
        let index: HashMap<&str, usize> = pages.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        // Outbound links by page index; empty for sinks
        let outbound: Vec<Vec<usize>> = graph
            .iter()
            .map(|(_, links)| links.iter().map(|target| index[target.as_str()]).collect())
            .collect();

        let n = pages.len() as f64;
        let teleport = (1.0 - self.damping) / n;
        let mut new_scores = vec![0.0; pages.len()];

        for iteration in 1..=self.max_iterations {
            // Sinks spread their rank over every page, themselves included
            let sink_mass: f64 = outbound
                .iter()
                .zip(&scores)
                .filter(|(links, _)| links.is_empty())
                .map(|(_, &score)| score)
                .sum();

            new_scores.fill(teleport + self.damping * sink_mass / n);

            for (links, &score) in outbound.iter().zip(&scores) {
                if links.is_empty() {
                    continue;
                }
                let share = self.damping * score / links.len() as f64;
                for &target in links {
                    new_scores[target] += share;
                }
            }

            let delta = scores
                .iter()
                .zip(&new_scores)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < CONVERGENCE_THRESHOLD {
                tracing::debug!("Converged after {} iterations (delta {:.6})", iteration, delta);
                let ranks = pages
                    .iter()
                    .zip(&scores)
                    .map(|(page, &score)| (page.to_string(), score))
                    .collect();
                return Ok(IterationReport {
                    ranks: RankTable::new(ranks),
                    iterations: iteration,
                    delta,
                });
            }
        }

        tracing::warn!(
            "PageRank iteration did not converge within {} iterations",
            self.max_iterations
        );
        Err(LinkRankError::NotConverged {
            iterations: self.max_iterations,
        })
    }
}

/// Compute PageRank by iteration until convergence
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<RankTable> {
    IterativeRank::new()
        .with_damping(damping)
        .run(graph)
        .map(|report| report.ranks)
}

/// Run the iterative estimator with the parameters of `config`
pub fn iterate_with_config(graph: &LinkGraph, config: &RankConfig) -> Result<IterationReport> {
    config.validate()?;
    IterativeRank::from(config).run(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_cycle() {
        let graph = LinkGraph::from_links([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]);
        let ranks = iterate_pagerank(&graph, 0.85).unwrap();
        for page in ["A", "B", "C"] {
            assert!((ranks.get(page).unwrap() - 1.0 / 3.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_sink_outranks_its_linker() {
        let graph = LinkGraph::from_links([("A", vec![]), ("B", vec!["A"])]);
        let ranks = iterate_pagerank(&graph, 0.85).unwrap();
        assert!(ranks.get("A").unwrap() > ranks.get("B").unwrap());
        assert!((ranks.total() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_single_page() {
        let graph = LinkGraph::from_links([("A", Vec::<&str>::new())]);
        let report = IterativeRank::new().run(&graph).unwrap();
        assert!((report.ranks.get("A").unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(report.iterations, 1);
    }

    #[test]
    fn test_known_corpus() {
        // corpus0 from the classic exercise set
        let graph = LinkGraph::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ]);
        let ranks = iterate_pagerank(&graph, 0.85).unwrap();
        assert!((ranks.get("1.html").unwrap() - 0.2202).abs() < 0.005);
        assert!((ranks.get("2.html").unwrap() - 0.4289).abs() < 0.005);
        assert!((ranks.get("3.html").unwrap() - 0.2202).abs() < 0.005);
        assert!((ranks.get("4.html").unwrap() - 0.1307).abs() < 0.005);
    }

    #[test]
    fn test_rerun_from_converged_is_stable() {
        let graph = LinkGraph::from_links([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
            ("d", vec!["c"]),
            ("e", vec![]),
        ]);
        let engine = IterativeRank::new();
        let first = engine.run(&graph).unwrap();
        let second = engine.run_from(&graph, &first.ranks).unwrap();

        assert_eq!(second.iterations, 1);
        for (page, rank) in first.ranks.iter() {
            assert!((second.ranks.get(page).unwrap() - rank).abs() < CONVERGENCE_THRESHOLD);
        }
    }

    #[test]
    fn test_iteration_cap() {
        let graph = LinkGraph::from_links([("a", vec!["b"]), ("b", vec![]), ("c", vec!["a"])]);
        let result = IterativeRank::new().with_max_iterations(1).run(&graph);
        assert!(matches!(
            result,
            Err(LinkRankError::NotConverged { iterations: 1 })
        ));
    }

    #[test]
    fn test_run_from_rejects_mismatched_table() {
        let graph = LinkGraph::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
        let table = RankTable::new([("a".to_string(), 0.5), ("z".to_string(), 0.5)].into());
        let result = IterativeRank::new().run_from(&graph, &table);
        assert!(matches!(result, Err(LinkRankError::InvalidPage(page)) if page == "b"));
    }

    #[test]
    fn test_empty_graph() {
        let result = iterate_pagerank(&LinkGraph::default(), 0.85);
        assert!(matches!(result, Err(LinkRankError::EmptyGraph)));
    }
}

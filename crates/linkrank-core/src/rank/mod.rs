//! PageRank estimation
//!
//! Two estimators over the random-surfer model:
//! - [`sample_pagerank`]: visit frequencies of a random walk
//! - [`IterativeRank`]: fixed-point iteration of the PageRank update rule

mod distribution;
mod iterative;
mod sampling;
mod transition;

pub use distribution::{weighted_choice, Distribution};
pub use iterative::{
    iterate_pagerank, iterate_with_config, IterationReport, IterativeRank, CONVERGENCE_THRESHOLD,
};
pub use sampling::{sample_pagerank, sample_with_config};
pub use transition::transition_model;

use crate::graph::Page;
use serde::Serialize;
use std::collections::BTreeMap;

/// Estimated rank of every page, in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankTable {
    ranks: BTreeMap<Page, f64>,
}

impl RankTable {
    pub fn new(ranks: BTreeMap<Page, f64>) -> Self {
        Self { ranks }
    }

    /// Rank of a page
    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    /// Iterate over (page, rank) sorted by page
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, &rank)| (page.as_str(), rank))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sum of all ranks
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Get top N pages by rank
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n() {
        let table = RankTable::new(
            [
                ("a".to_string(), 0.2),
                ("b".to_string(), 0.5),
                ("c".to_string(), 0.3),
            ]
            .into(),
        );
        let top = table.top_n(2);
        assert_eq!(top, vec![("b", 0.5), ("c", 0.3)]);
    }

    #[test]
    fn test_serializes_as_map() {
        let table = RankTable::new([("a".to_string(), 1.0)].into());
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"a":1.0}"#);
    }
}

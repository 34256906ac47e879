//! Discrete probability distributions and weighted random choice

use crate::graph::Page;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Probability mass over pages, in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    probabilities: BTreeMap<Page, f64>,
}

impl Distribution {
    pub(crate) fn new(probabilities: BTreeMap<Page, f64>) -> Self {
        Self { probabilities }
    }

    /// Probability of a page (0 for pages outside the distribution)
    pub fn probability(&self, page: &str) -> f64 {
        self.probabilities.get(page).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.probabilities.iter().map(|(page, &p)| (page.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Draw a page according to this distribution
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        weighted_choice(self.iter(), rng)
    }
}

/// Pick one item from `(item, weight)` pairs by walking the cumulative mass.
///
/// Draws `r` uniformly from [0, 1) and returns the first item whose
/// cumulative weight exceeds `r`. When rounding leaves `r` unmatched the
/// last item is returned. `None` only for an empty input.
pub fn weighted_choice<T, I, R>(items: I, rng: &mut R) -> Option<T>
where
    I: IntoIterator<Item = (T, f64)>,
    R: Rng + ?Sized,
{
    let r: f64 = rng.gen();
    let mut cumulative = 0.0;
    let mut last = None;

    for (item, weight) in items {
        cumulative += weight;
        if r < cumulative {
            return Some(item);
        }
        last = Some(item);
    }

    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_weighted_choice_empty() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let items: Vec<(&str, f64)> = Vec::new();
        assert_eq!(weighted_choice(items, &mut rng), None);
    }

    #[test]
    fn test_weighted_choice_certain() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..100 {
            let choice = weighted_choice([("a", 0.0), ("b", 1.0), ("c", 0.0)], &mut rng);
            assert_eq!(choice, Some("b"));
        }
    }

    #[test]
    fn test_weighted_choice_falls_back_to_last() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        // Zero total mass never exceeds a draw
        let choice = weighted_choice([("a", 0.0), ("b", 0.0), ("c", 0.0)], &mut rng);
        assert_eq!(choice, Some("c"));
    }

    #[test]
    fn test_weighted_choice_frequencies() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut hits = [0usize; 3];
        let trials = 20_000;
        for _ in 0..trials {
            let idx = weighted_choice([(0usize, 0.2), (1, 0.5), (2, 0.3)], &mut rng).unwrap();
            hits[idx] += 1;
        }
        let freq: Vec<f64> = hits.iter().map(|&h| h as f64 / trials as f64).collect();
        assert!((freq[0] - 0.2).abs() < 0.02);
        assert!((freq[1] - 0.5).abs() < 0.02);
        assert!((freq[2] - 0.3).abs() < 0.02);
    }
}

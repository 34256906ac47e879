//! Link graph and corpus crawling

mod crawler;
mod link_extractor;

pub use crawler::{crawl, CrawlOptions};
pub use link_extractor::extract_links;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Page identifier (a file name within the corpus)
pub type Page = String;

/// Directed link graph over a fixed, sorted set of pages.
///
/// Every link target is itself a page of the graph: targets outside the
/// page set are dropped at construction. A page with no outbound links
/// is a sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkGraph {
    links: BTreeMap<Page, BTreeSet<Page>>,
}

impl LinkGraph {
    /// Build a graph from raw page -> outbound link data, pruning dangling links
    pub fn from_links<I, P, L, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<Page>,
        L: IntoIterator<Item = T>,
        T: Into<Page>,
    {
        let raw: Vec<(Page, BTreeSet<Page>)> = raw
            .into_iter()
            .map(|(page, targets)| (page.into(), targets.into_iter().map(Into::into).collect()))
            .collect();

        let known: BTreeSet<Page> = raw.iter().map(|(page, _)| page.clone()).collect();

        let mut links: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
        for (page, targets) in raw {
            let kept: BTreeSet<Page> = targets
                .into_iter()
                .filter(|target| known.contains(target))
                .collect();
            links.entry(page).or_default().extend(kept);
        }

        Self { links }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Pages in their fixed (sorted) order
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.keys().map(String::as_str)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Outbound links of a page, or `None` when the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<Page>> {
        self.links.get(page)
    }

    /// Whether a known page has no outbound links
    pub fn is_sink(&self, page: &str) -> Option<bool> {
        self.links.get(page).map(BTreeSet::is_empty)
    }

    /// Iterate over every page with its outbound links
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Page>)> + '_ {
        self.links.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }
}

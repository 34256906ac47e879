//! Corpus crawling: turn a directory of HTML pages into a link graph

use super::{extract_links, LinkGraph, Page};
use crate::config::CrawlConfig;
use crate::error::{LinkRankError, Result};
use glob::Pattern;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Crawl options
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub pattern: String,
    pub recursive: bool,
    pub exclude_hidden: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self::from(&CrawlConfig::default())
    }
}

impl From<&CrawlConfig> for CrawlOptions {
    fn from(config: &CrawlConfig) -> Self {
        Self {
            pattern: config.pattern.clone(),
            recursive: config.recursive,
            exclude_hidden: true,
        }
    }
}

/// Parse every matching document under `root` and build its link graph.
///
/// Pages are named by their path relative to `root`. Links to the page
/// itself and links leaving the corpus are dropped.
pub fn crawl(root: &Path, options: &CrawlOptions) -> Result<LinkGraph> {
    if !root.is_dir() {
        return Err(LinkRankError::MalformedInput(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let pattern = Pattern::new(&options.pattern)?;
    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut pages: Vec<(Page, BTreeSet<Page>)> = Vec::new();

    for entry in walker
        .into_iter()
        .filter_entry(|e| !should_skip(e, options))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        if !pattern.matches(&relative) {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            LinkRankError::MalformedInput(format!("cannot read {}: {}", path.display(), e))
        })?;

        let mut links: BTreeSet<Page> = extract_links(&content)
            .iter()
            .filter_map(|href| resolve_link(&relative, href))
            .collect();
        links.remove(&relative);
        tracing::debug!("{}: {} outbound links", relative, links.len());

        pages.push((relative, links));
    }

    let graph = LinkGraph::from_links(pages);
    tracing::info!(
        "Crawled {} pages with {} links from {}",
        graph.len(),
        graph.link_count(),
        root.display()
    );

    Ok(graph)
}

/// Resolve an href against the directory of the page containing it.
///
/// Returns a `/`-separated path relative to the corpus root, or `None` for
/// external URLs, fragments and paths that climb above the root.
fn resolve_link(source: &str, href: &str) -> Option<Page> {
    if href.is_empty()
        || href.starts_with('#')
        || href.contains("://")
        || href.starts_with("mailto:")
    {
        return None;
    }

    let mut components: Vec<&str> = match href.strip_prefix('/') {
        Some(_) => Vec::new(),
        None => {
            let mut dir: Vec<&str> = source.split('/').collect();
            dir.pop();
            dir
        }
    };

    for component in href.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                components.pop()?;
            }
            _ => components.push(component),
        }
    }

    if components.is_empty() {
        None
    } else {
        Some(components.join("/"))
    }
}

fn should_skip(entry: &DirEntry, options: &CrawlOptions) -> bool {
    options.exclude_hidden && entry.file_name().to_string_lossy().starts_with('.')
}

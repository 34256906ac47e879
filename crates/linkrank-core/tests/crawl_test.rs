//! Integration tests for crawling a corpus and ranking it

use linkrank_core::{crawl, iterate_with_config, sample_with_config, CrawlOptions, RankConfig};
use std::fs;
use tempfile::TempDir;

fn create_corpus(dir: &TempDir) {
    let pages = [
        (
            "index.html",
            r#"<html><body><h1>Home</h1>
            <a href="about.html">About</a>
            <a href="search.html">Search</a>
            <a href="https://example.org/">External</a>
            </body></html>"#,
        ),
        (
            "about.html",
            r#"<a href="index.html">Home</a> <a href="about.html">This page</a>"#,
        ),
        ("search.html", r#"<a href="index.html">Home</a><a href="missing.html">Broken</a>"#),
        ("archive.html", "<p>No links here.</p>"),
        ("README.md", "[index](index.html)"),
    ];

    for (name, content) in &pages {
        fs::write(dir.path().join(name), content).unwrap();
    }
}

#[test]
fn test_crawl_and_rank() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let graph = crawl(dir.path(), &CrawlOptions::default()).unwrap();
    assert_eq!(
        graph.pages().collect::<Vec<_>>(),
        vec!["about.html", "archive.html", "index.html", "search.html"]
    );
    assert_eq!(graph.links("index.html").unwrap().len(), 2);
    assert_eq!(graph.links("about.html").unwrap().len(), 1);
    assert_eq!(graph.links("search.html").unwrap().len(), 1);
    assert_eq!(graph.is_sink("archive.html"), Some(true));

    let config = RankConfig::default()
        .with_damping(0.85)
        .with_samples(20_000)
        .with_seed(11)
        .with_max_iterations(1_000);

    let sampled = sample_with_config(&graph, &config).unwrap();
    let iterated = iterate_with_config(&graph, &config).unwrap();

    assert!((sampled.total() - 1.0).abs() < 1e-9);
    assert!((iterated.ranks.total() - 1.0).abs() < 0.01);

    // Everything links home, nothing links to the archive
    let top = iterated.ranks.top_n(1);
    assert_eq!(top[0].0, "index.html");
    let archive = iterated.ranks.get("archive.html").unwrap();
    assert!(iterated.ranks.iter().all(|(_, rank)| rank >= archive));
}

#[test]
fn test_custom_pattern() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let options = CrawlOptions {
        pattern: "*.md".to_string(),
        ..CrawlOptions::default()
    };
    let graph = crawl(dir.path(), &options).unwrap();
    assert_eq!(graph.pages().collect::<Vec<_>>(), vec!["README.md"]);
    // index.html is outside this corpus, so the markdown page is a sink
    assert_eq!(graph.is_sink("README.md"), Some(true));
}

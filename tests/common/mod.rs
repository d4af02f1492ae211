//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::sync::LazyLock;
use wikisearch::{Category, Filter, Record, SearchIndex};

// Re-export canonical test utilities from wikisearch::testing
pub use wikisearch::testing::make_record;

// ============================================================================
// FIXTURES
// ============================================================================

/// The built-in wiki catalog, built once per test binary.
pub static WIKI: LazyLock<SearchIndex> = LazyLock::new(SearchIndex::builtin);

/// Titles of the search results, in rank order.
pub fn titles(results: &[&Record]) -> Vec<String> {
    results.iter().map(|r| r.title.clone()).collect()
}

/// Search the built-in catalog and return result titles.
pub fn wiki_titles(query: &str, filter: Filter) -> Vec<String> {
    titles(&WIKI.search(query, filter))
}

/// A small catalog exercising every ranking combination.
///
/// | # | Title match | Description match | Keyword match | Score |
/// |---|-------------|-------------------|---------------|-------|
/// | 0 | no          | no                | yes           | 1     |
/// | 1 | no          | yes               | no            | 2     |
/// | 2 | yes         | no                | no            | 3     |
/// | 3 | yes         | yes               | yes           | 6     |
/// | 4 | no          | yes               | yes           | 3     |
pub fn ranking_catalog() -> SearchIndex {
    SearchIndex::new(vec![
        make_record("Alpha", Category::Guides, "Nothing here", &["Marché"]),
        make_record("Beta", Category::Guides, "Le marché central", &[]),
        make_record("Marché Noir", Category::Rules, "Interdit", &[]),
        make_record("Marché", Category::Jobs, "Vendre au marché", &["marché"]),
        make_record("Gamma", Category::Faq, "Où est le marché ?", &["marchés"]),
    ])
}

/// Path to a catalog JSON in a temp dir, holding `records`.
pub fn write_catalog(dir: &std::path::Path, records: &[Record]) -> std::path::PathBuf {
    let path = dir.join("catalog.json");
    let json = serde_json::to_string(records).expect("serialize catalog");
    std::fs::write(&path, json).expect("write catalog");
    path
}

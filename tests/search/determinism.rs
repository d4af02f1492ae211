//! Same input, same output: across calls and across index instances.

use super::common::WIKI;
use wikisearch::{Filter, SearchIndex, SearchOptions};

#[test]
fn test_repeated_search_is_identical() {
    for query in ["transport", "le", "aide", "serveur", "/t"] {
        for filter in Filter::buttons() {
            let first = WIKI.search_scored(query, filter, SearchOptions::default());
            let second = WIKI.search_scored(query, filter, SearchOptions::default());
            assert_eq!(first, second, "query {:?} filter {}", query, filter);
        }
    }
}

#[test]
fn test_fresh_index_gives_same_results() {
    let other = SearchIndex::builtin();
    let a: Vec<&str> = WIKI
        .search("joueurs", Filter::All)
        .iter()
        .map(|r| r.url.as_str())
        .collect();
    let b: Vec<&str> = other
        .search("joueurs", Filter::All)
        .iter()
        .map(|r| r.url.as_str())
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_hit_positions_point_back_into_the_index() {
    for hit in WIKI.search_scored("de", Filter::All, SearchOptions::default()) {
        assert_eq!(WIKI.get(hit.position), Some(hit.record));
    }
}

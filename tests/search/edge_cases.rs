//! Inputs at the edges: short, blank, odd characters.

use super::common::{wiki_titles, WIKI};
use wikisearch::{Category, Filter};

#[test]
fn test_single_character_returns_nothing_for_every_filter() {
    for filter in Filter::buttons() {
        assert!(WIKI.search("x", filter).is_empty(), "filter {}", filter);
        assert!(WIKI.search("e", filter).is_empty(), "filter {}", filter);
    }
}

#[test]
fn test_whitespace_only_returns_nothing() {
    assert!(WIKI.search("", Filter::All).is_empty());
    assert!(WIKI.search("     ", Filter::All).is_empty());
    assert!(WIKI.search(" a\t", Filter::All).is_empty());
}

#[test]
fn test_padding_and_case_are_ignored() {
    assert_eq!(
        wiki_titles("  TAXI  ", Filter::All),
        wiki_titles("taxi", Filter::All)
    );
}

#[test]
fn test_regex_metacharacters_are_literal() {
    assert!(WIKI.search(".*", Filter::All).is_empty());
    assert_eq!(wiki_titles("[id]", Filter::All), vec!["/pay [id] [montant]"]);
}

#[test]
fn test_accented_queries_match() {
    let results = wiki_titles("hélicoptère", Filter::Only(Category::Jobs));
    assert_eq!(results.first().map(String::as_str), Some("Pilote d'Hélicoptère"));
}

#[test]
fn test_long_query_without_match_is_empty() {
    let query = "z".repeat(10_000);
    assert!(WIKI.search(&query, Filter::All).is_empty());
}

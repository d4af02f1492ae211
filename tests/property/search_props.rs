//! Invariants of `SearchIndex::search` over random catalogs.

use super::strategies::{catalog_strategy, filter_strategy, query_strategy};
use proptest::prelude::*;
use wikisearch::{normalize_query, Filter, SearchIndex, SearchOptions, MIN_QUERY_LEN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: normalized queries shorter than two characters find nothing.
    #[test]
    fn prop_short_queries_are_empty(
        catalog in catalog_strategy(),
        query in query_strategy(),
        filter in filter_strategy(),
    ) {
        let index = SearchIndex::new(catalog);
        if normalize_query(&query).chars().count() < MIN_QUERY_LEN {
            prop_assert!(index.search(&query, filter).is_empty());
        }
    }

    /// Property: every substring (≥ 2 chars) of a lower-cased title finds
    /// that record under `All`.
    #[test]
    fn prop_title_substrings_are_found(
        catalog in catalog_strategy(),
        pick in any::<prop::sample::Index>(),
        start in any::<prop::sample::Index>(),
        len in 2usize..6,
    ) {
        let index = SearchIndex::new(catalog);
        let target = pick.get(index.records());
        let chars: Vec<char> = target.title.to_lowercase().chars().collect();
        prop_assume!(chars.len() >= 2);

        let from = start.index(chars.len() - 1);
        let to = (from + len).min(chars.len());
        let query: String = chars[from..to].iter().collect();
        // Substrings with edge whitespace are trimmed into something else
        prop_assume!(query.trim() == query && query.chars().count() >= 2);

        let results = index.search(&query, Filter::All);
        prop_assert!(
            results.iter().any(|r| std::ptr::eq(*r, target)),
            "'{}' not found by its title substring {:?}",
            target.title,
            query
        );
    }

    /// Property: under `Only(c)`, every result has category `c`.
    #[test]
    fn prop_filter_is_respected(
        catalog in catalog_strategy(),
        query in query_strategy(),
        filter in filter_strategy(),
    ) {
        let index = SearchIndex::new(catalog);
        for record in index.search(&query, filter) {
            prop_assert!(filter.admits(record.category));
        }
    }

    /// Property: scores never increase down the list, and equal scores keep
    /// index order.
    #[test]
    fn prop_sorted_and_stable(
        catalog in catalog_strategy(),
        query in query_strategy(),
        filter in filter_strategy(),
    ) {
        let index = SearchIndex::new(catalog);
        let hits = index.search_scored(&query, filter, SearchOptions::default());
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    /// Property: identical inputs give identical output.
    #[test]
    fn prop_deterministic(
        catalog in catalog_strategy(),
        query in query_strategy(),
        filter in filter_strategy(),
    ) {
        let index = SearchIndex::new(catalog);
        let first = index.search_scored(&query, filter, SearchOptions::default());
        let second = index.search_scored(&query, filter, SearchOptions::default());
        prop_assert_eq!(first, second);
    }

    /// Property: a limit returns a prefix of the unlimited result list.
    #[test]
    fn prop_limit_is_a_prefix(
        catalog in catalog_strategy(),
        query in query_strategy(),
        limit in 0usize..5,
    ) {
        let index = SearchIndex::new(catalog);
        let full = index.search_scored(&query, Filter::All, SearchOptions::default());
        let limited = index.search_scored(&query, Filter::All, SearchOptions { limit: Some(limit) });
        prop_assert_eq!(&full[..limited.len()], &limited[..]);
        prop_assert_eq!(limited.len(), full.len().min(limit));
    }
}

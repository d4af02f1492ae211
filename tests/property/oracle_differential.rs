//! Differential testing: the crate's matcher against the naive oracle.

use super::oracles::{oracle_score, oracle_search};
use super::strategies::{catalog_strategy, filter_strategy, query_strategy, record_strategy};
use proptest::prelude::*;
use wikisearch::scoring::relevance;
use wikisearch::{normalize_query, SearchIndex, SearchOptions};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Differential test: result order matches the oracle exactly.
    #[test]
    fn diff_search_order(
        catalog in catalog_strategy(),
        query in query_strategy(),
        filter in filter_strategy(),
    ) {
        let expected = oracle_search(&catalog, &query, filter);
        let index = SearchIndex::new(catalog);
        let actual: Vec<usize> = index
            .search_scored(&query, filter, SearchOptions::default())
            .iter()
            .map(|hit| hit.position)
            .collect();
        prop_assert_eq!(actual, expected, "query {:?} filter {}", query, filter);
    }

    /// Differential test: per-record relevance matches the oracle.
    #[test]
    fn diff_relevance(record in record_strategy(), query in query_strategy()) {
        let query = normalize_query(&query);
        prop_assert_eq!(relevance(&record, &query), oracle_score(&record, &query));
    }
}

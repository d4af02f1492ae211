// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary text against the built-in catalog, under every filter. Search
//! must never panic, must respect the filter and must return results sorted
//! by descending score with ties in catalog order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wikisearch::{normalize_query, Category, Filter, SearchIndex, SearchOptions, MIN_QUERY_LEN};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query_bytes: Vec<u8>,
    /// 0 is "all", 1..=5 pick a category
    filter: u8,
}

fuzz_target!(|input: QueryInput| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(SearchIndex::builtin);

    let query = String::from_utf8_lossy(&input.query_bytes);
    let query: String = query.chars().take(200).collect();

    let filter = match input.filter as usize % (Category::ALL.len() + 1) {
        0 => Filter::All,
        n => Filter::Only(Category::ALL[n - 1]),
    };

    let hits = index.search_scored(&query, filter, SearchOptions::default());

    if normalize_query(&query).chars().count() < MIN_QUERY_LEN {
        assert!(hits.is_empty(), "short query {:?} returned results", query);
    }

    for hit in &hits {
        assert!(filter.admits(hit.record.category), "filter {} leaked", filter);
        assert!(index.get(hit.position).is_some());
    }

    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results not sorted by score");
        if pair[0].score == pair[1].score {
            assert!(pair[0].position < pair[1].position, "tie order not stable");
        }
    }
});

// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for match highlighting.
//!
//! Ranges must be in bounds, on character boundaries, ordered and
//! non-overlapping; segments must reassemble into the original text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wikisearch::highlight::{find_matches, segments};
use wikisearch::normalize_query;

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    let text: String = input.text.chars().take(500).collect();
    let query = normalize_query(&input.query.chars().take(50).collect::<String>());

    let ranges = find_matches(&text, &query);
    let mut last_end = 0;
    for range in &ranges {
        assert!(range.start >= last_end, "overlapping or unordered ranges");
        assert!(range.end <= text.len());
        assert!(text.is_char_boundary(range.start) && text.is_char_boundary(range.end));
        assert!(range.start < range.end);
        last_end = range.end;
    }

    let rebuilt: String = segments(&text, &query)
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(rebuilt, text);
});

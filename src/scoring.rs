// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring: flat per-field bonuses.
//!
//! A record earns a bonus for each field that contains the query, regardless
//! of how many times or where. The weights are ordered so that a title match
//! alone outranks a keyword-only match, and a description match alone also
//! outranks it:
//!
//! ```text
//! score = 3·[title ∋ q] + 2·[description ∋ q] + 1·[∃ keyword ∋ q]
//! ```
//!
//! Matching itself is looser than scoring: a record matches when the
//! space-joined `title description keywords...` contains the query. A query
//! that straddles a field boundary ("interdit tout") matches with score 0.

use crate::types::Record;

/// Bonus when the lower-cased title contains the query.
pub const TITLE_WEIGHT: u32 = 3;

/// Bonus when the lower-cased description contains the query.
pub const DESCRIPTION_WEIGHT: u32 = 2;

/// Bonus when at least one lower-cased keyword contains the query.
pub const KEYWORD_WEIGHT: u32 = 1;

/// Highest score a record can reach.
pub const MAX_SCORE: u32 = TITLE_WEIGHT + DESCRIPTION_WEIGHT + KEYWORD_WEIGHT;

/// Lower-cased, space-joined searchable text of a record.
pub fn haystack(record: &Record) -> String {
    let mut text = String::with_capacity(
        record.title.len()
            + record.description.len()
            + record.keywords.iter().map(|k| k.len() + 1).sum::<usize>()
            + 1,
    );
    text.push_str(&record.title);
    text.push(' ');
    text.push_str(&record.description);
    text.push(' ');
    text.push_str(&record.keywords.join(" "));
    text.to_lowercase()
}

/// Does the record's combined text contain `query`?
///
/// `query` must already be normalized (see [`crate::normalize_query`]).
pub fn matches(record: &Record, query: &str) -> bool {
    haystack(record).contains(query)
}

/// Relevance of `record` for an already-normalized `query`.
pub fn relevance(record: &Record, query: &str) -> u32 {
    let mut score = 0;
    if record.title.to_lowercase().contains(query) {
        score += TITLE_WEIGHT;
    }
    if record.description.to_lowercase().contains(query) {
        score += DESCRIPTION_WEIGHT;
    }
    if record
        .keywords
        .iter()
        .any(|keyword| keyword.to_lowercase().contains(query))
    {
        score += KEYWORD_WEIGHT;
    }
    score
}

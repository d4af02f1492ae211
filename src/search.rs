// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! The matcher: filter, match, score, stable sort.
//!
//! Everything here is a pure function of `(records, query, filter)`. No
//! input string can make it fail; malformed or short queries simply produce
//! no hits.
//!
//! # Pipeline
//!
//! ```text
//! raw input ─► normalize_query ─► len < 2? ─► []
//!                                    │
//!                                    ▼
//!            records ─► filter.admits ─► scoring::matches ─► relevance
//!                                                               │
//!                                                               ▼
//!                                           stable sort by score desc
//! ```

use crate::scoring::{matches, relevance};
use crate::types::{Filter, Hit, Record};
use std::cmp::Reverse;

/// Queries shorter than this (in characters) never match anything.
pub const MIN_QUERY_LEN: usize = 2;

/// Options that shape the result list without changing ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Keep at most this many hits. `None` keeps them all.
    pub limit: Option<usize>,
}

/// Trim and lower-case raw user input.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Is a normalized query long enough to run?
#[inline]
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Rank `records` against an already-normalized `query`.
///
/// Hits come back by descending score. Equal scores keep the order of
/// `records`: `sort_by_key` is a stable sort, so ties are never reshuffled.
pub fn search_scored<'a>(
    records: &'a [Record],
    query: &str,
    filter: Filter,
    options: SearchOptions,
) -> Vec<Hit<'a>> {
    if !is_searchable(query) {
        return Vec::new();
    }

    let mut hits: Vec<Hit<'a>> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.admits(record.category))
        .filter(|(_, record)| matches(record, query))
        .map(|(position, record)| Hit {
            position,
            score: relevance(record, query),
            record,
        })
        .collect();

    hits.sort_by_key(|hit| Reverse(hit.score));

    if let Some(limit) = options.limit {
        hits.truncate(limit);
    }
    hits
}

/// Rank `records` against an already-normalized `query`, returning records only.
pub fn search<'a>(records: &'a [Record], query: &str, filter: Filter) -> Vec<&'a Record> {
    search_scored(records, query, filter, SearchOptions::default())
        .into_iter()
        .map(|hit| hit.record)
        .collect()
}

// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting for result titles and descriptions.
//!
//! Finds every case-insensitive occurrence of the (already lower-cased) query
//! in the display text and reports byte ranges into the *original* text, so
//! the renderer can wrap them without touching the surrounding characters.
//! The query is always literal: `"[id]"` highlights the brackets, it is never
//! interpreted as a pattern.
//!
//! Occurrences are found left to right and never overlap.

use serde::Serialize;
use std::ops::Range;

/// A run of display text, either plain or part of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Byte ranges of `text` whose lower-cased form equals `query`.
///
/// `query` must be lower-case. An empty query matches nothing.
pub fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if query.is_empty() {
        return ranges;
    }

    let mut search_from = 0;
    while search_from < text.len() {
        let found = text[search_from..]
            .char_indices()
            .map(|(offset, _)| search_from + offset)
            .find_map(|start| match_at(text, start, query).map(|end| start..end));

        match found {
            Some(range) => {
                search_from = range.end;
                ranges.push(range);
            }
            None => break,
        }
    }
    ranges
}

/// If the lower-cased text starting at `start` begins with `query`, return
/// the byte offset just past the matched text.
///
/// A match must end on a character boundary of the original text: when a
/// character lower-cases to several characters, all of them must be consumed.
fn match_at(text: &str, start: usize, query: &str) -> Option<usize> {
    let mut expected = query.chars().peekable();
    for (offset, ch) in text[start..].char_indices() {
        for lower in ch.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
        if expected.peek().is_none() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

/// Split `text` into plain and highlighted segments for `query`.
pub fn segments(text: &str, query: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for range in find_matches(text, query) {
        if range.start > cursor {
            out.push(Segment::plain(&text[cursor..range.start]));
        }
        out.push(Segment::marked(&text[range.clone()]));
        cursor = range.end;
    }
    if cursor < text.len() || out.is_empty() {
        out.push(Segment::plain(&text[cursor..]));
    }
    out
}

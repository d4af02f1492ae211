//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::SearchIndex;
use crate::types::{Category, Record};

/// Create a record with a URL derived from its category and title.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(title: &str, category: Category, description: &str, keywords: &[&str]) -> Record {
    Record {
        title: title.to_string(),
        category,
        description: description.to_string(),
        url: format!("/{}#{}", category, slugify(title)),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Create a minimal record whose only searchable text is its title.
pub fn make_record_simple(title: &str, category: Category) -> Record {
    make_record(title, category, "", &[])
}

/// Build an index from `(title, category)` pairs.
pub fn make_index(entries: &[(&str, Category)]) -> SearchIndex {
    SearchIndex::new(
        entries
            .iter()
            .map(|(title, category)| make_record_simple(title, *category))
            .collect(),
    )
}

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

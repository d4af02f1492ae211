// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! The read-only search index.
//!
//! `SearchIndex` owns the record list for the lifetime of a page view. Once
//! built it never changes: there is no `&mut` API, and every lookup hands out
//! shared references. That makes it `Send + Sync` and lets the shell and the
//! WASM binding share one instance behind an `Rc`.

use crate::catalog::{self, CatalogError};
use crate::search::{normalize_query, search_scored, SearchOptions};
use crate::types::{Category, Filter, Hit, Record};
use std::path::Path;

/// In-memory list of searchable records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    records: Vec<Record>,
}

impl SearchIndex {
    /// Wrap an already-validated record list.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Index over the wiki's built-in catalog.
    pub fn builtin() -> Self {
        Self::new(catalog::builtin_records())
    }

    /// Parse and validate a JSON catalog (an array of records).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        catalog::parse(json).map(Self::new)
    }

    /// Read, parse and validate a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        catalog::load(path.as_ref()).map(Self::new)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one category, in index order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Find records matching raw user input, most relevant first.
    ///
    /// The input is trimmed and lower-cased here; inputs shorter than two
    /// characters after that yield nothing.
    pub fn search(&self, raw_query: &str, filter: Filter) -> Vec<&Record> {
        self.search_scored(raw_query, filter, SearchOptions::default())
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    /// Like [`search`](Self::search) but keeps scores and index positions.
    pub fn search_scored(
        &self,
        raw_query: &str,
        filter: Filter,
        options: SearchOptions,
    ) -> Vec<Hit<'_>> {
        let query = normalize_query(raw_query);
        search_scored(&self.records, &query, filter, options)
    }
}

impl From<Vec<Record>> for SearchIndex {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

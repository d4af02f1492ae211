// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catalogs: where records come from.
//!
//! The wiki ships a built-in catalog compiled into the crate. Site builds can
//! also hand over a JSON file with the same shape as the page's
//! `search-data.js` array:
//!
//! ```json
//! [
//!   {
//!     "title": "Chauffeur de Bus",
//!     "category": "jobs",
//!     "description": "Transport public et lignes de bus.",
//!     "url": "/jobs/busdriver",
//!     "keywords": ["bus", "transport", "public", "lignes"]
//!   }
//! ]
//! ```
//!
//! Loading validates every record. A catalog that leaves a category without
//! records still loads (its filter button just shows nothing); [`check`]
//! reports it so the build can warn.

mod builtin;

use crate::types::{Category, Record};
use std::fs;
use std::path::{Path, PathBuf};

pub use builtin::builtin_records;

/// File name written by [`export`] and read by the host page.
pub const EXPORT_FILE_NAME: &str = "search-data.json";

/// Why a catalog could not be loaded or written.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to access catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog contains no records")]
    EmptyCatalog,
    #[error("record {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

/// Per-category summary of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub total: usize,
    /// Record count per category, indexed by [`Category::ordinal`].
    pub per_category: [usize; Category::ALL.len()],
}

impl CatalogReport {
    pub fn count(&self, category: Category) -> usize {
        self.per_category[category.ordinal()]
    }

    /// Categories whose filter button would always show "no results".
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.count(*c) == 0)
            .collect()
    }
}

/// Parse a JSON array of records and validate it.
pub fn parse(json: &str) -> Result<Vec<Record>, CatalogError> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    validate(&records)?;
    tracing::info!(records = records.len(), "catalog parsed");
    Ok(records)
}

/// Read a catalog file from disk.
pub fn load(path: &Path) -> Result<Vec<Record>, CatalogError> {
    let json = fs::read_to_string(path).map_err(io_error(path))?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "catalog read");
    parse(&json)
}

/// Reject records the search modal could not display or link to.
pub fn validate(records: &[Record]) -> Result<(), CatalogError> {
    if records.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    for (index, record) in records.iter().enumerate() {
        if record.title.trim().is_empty() {
            return Err(CatalogError::EmptyField { index, field: "title" });
        }
        if record.url.trim().is_empty() {
            return Err(CatalogError::EmptyField { index, field: "url" });
        }
    }
    Ok(())
}

/// Count records per category and warn about empty categories.
pub fn check(records: &[Record]) -> CatalogReport {
    let mut per_category = [0usize; Category::ALL.len()];
    for record in records {
        per_category[record.category.ordinal()] += 1;
    }
    let report = CatalogReport {
        total: records.len(),
        per_category,
    };
    for category in report.missing() {
        tracing::warn!(%category, "category has no records");
    }
    report
}

/// Write `records` as pretty JSON into `dir`, returning the file path.
pub fn export(records: &[Record], dir: &Path) -> Result<PathBuf, CatalogError> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = dir.join(EXPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json).map_err(io_error(&path))?;
    tracing::info!(path = %path.display(), records = records.len(), "catalog exported");
    Ok(path)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError {
    let path = path.to_path_buf();
    move |source| CatalogError::Io { path, source }
}

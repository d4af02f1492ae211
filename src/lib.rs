// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-page search for the Capitalyx wiki.
//!
//! A small, static catalog of records (rules, guides, jobs, commands, FAQ)
//! searched by case-insensitive substring and ranked by where the query
//! appears: title, description, keywords. The search modal itself is a
//! DOM-free state machine the page drives through the WASM binding.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog/   │────▶│   index.rs   │────▶│  search.rs   │
//! │ (builtin,   │     │ (SearchIndex,│     │ (normalize,  │
//! │  JSON load) │     │  read-only)  │     │  filter,rank)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │   shell/     │────▶│  render.rs   │
//!                     │ (state       │     │ (ResultsView,│
//!                     │  machine)    │     │  highlight)  │
//!                     └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │   wasm.rs    │  (feature "wasm")
//!                     │ (WikiSearch) │
//!                     └──────────────┘
//! ```
//!
//! | Module      | Responsibility                                   |
//! |-------------|--------------------------------------------------|
//! | `types`     | Record, Category, Filter, Locale, Hit            |
//! | `scoring`   | Substring predicate and 3/2/1 relevance          |
//! | `search`    | Normalization, minimum length, stable ranking    |
//! | `index`     | Immutable record store                           |
//! | `catalog`   | Built-in records, JSON load/validate/export      |
//! | `highlight` | Case-insensitive match ranges for display        |
//! | `render`    | Pure results view and its HTML serialization     |
//! | `shell`     | Modal states, events, keyboard mapping           |
//! | `config`    | Locale, limit and shortcut options               |
//!
//! # Usage
//!
//! ```
//! use wikisearch::{Category, Filter, SearchIndex};
//!
//! let index = SearchIndex::builtin();
//! let results = index.search("griefing", Filter::All);
//! assert_eq!(results[0].title, "Griefing Interdit");
//!
//! let jobs = index.search("transport", Filter::Only(Category::Jobs));
//! assert!(jobs.iter().all(|r| r.category == Category::Jobs));
//! ```

pub mod catalog;
pub mod config;
pub mod highlight;
mod index;
pub mod render;
pub mod scoring;
pub mod search;
pub mod shell;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{CatalogError, CatalogReport};
pub use config::{ConfigError, SearchConfig};
pub use highlight::Segment;
pub use index::SearchIndex;
pub use render::{render_results, ResultItem, ResultsView};
pub use search::{normalize_query, SearchOptions, MIN_QUERY_LEN};
pub use shell::{Direction, Effect, KeyPress, SearchShell, ShellEvent, ShellState};
pub use types::{Category, Filter, FilterParseError, Hit, Locale, LocaleParseError, Record};

#[cfg(feature = "wasm")]
pub use wasm::WikiSearch;

// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wikisearch command-line interface.
//!
//! Four subcommands: `search` to query a catalog the way the modal does,
//! `list` to print records by category, `check` to validate a catalog file
//! before a site build, and `export` to write the `search-data.json` the
//! page loads.

pub mod display;

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use wikisearch::{CatalogError, ConfigError, Filter, Locale};

#[derive(Parser)]
#[command(
    name = "wikisearch",
    about = "Search and validate the Capitalyx wiki catalog",
    version
)]
pub struct Cli {
    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with search options ({"locale", "limit", "shortcut"})
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display ranked results
    Search {
        /// Search query (at least two characters)
        query: String,

        /// Category filter: all, rules, guides, jobs, commands or faq
        #[arg(short, long, default_value = "all")]
        filter: Filter,

        /// Catalog JSON file (defaults to the built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Language of labels and messages: fr, en or es
        #[arg(long)]
        locale: Option<Locale>,

        /// Maximum number of results to display
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List catalog records grouped by category
    List {
        /// Only list this category
        #[arg(short, long, default_value = "all")]
        filter: Filter,

        /// Catalog JSON file (defaults to the built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog file and report per-category counts
    Check {
        /// Path to the catalog JSON file
        file: PathBuf,
    },

    /// Write search-data.json for the static site
    Export {
        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Catalog JSON file (defaults to the built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

/// Anything that makes a subcommand fail.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Search widget options.
//!
//! Passed as a plain object from JavaScript (`new WikiSearch({ locale: "en" })`)
//! or as a JSON file to the CLI (`--config search.json`). Every field is
//! optional; missing fields take the defaults below.
//!
//! | Field      | Default | Meaning                                   |
//! |------------|---------|-------------------------------------------|
//! | `locale`   | `"fr"`  | Language of labels and messages           |
//! | `limit`    | none    | Maximum number of results shown (`>= 1`)  |
//! | `shortcut` | `"k"`   | Letter that opens search with Ctrl/Cmd    |

use crate::search::SearchOptions;
use crate::types::Locale;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Options shared by the shell, the WASM binding and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub locale: Locale,
    /// A zero limit would hide every match, so it is rejected at parse time.
    pub limit: Option<NonZeroUsize>,
    pub shortcut: char,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Fr,
            limit: None,
            shortcut: 'k',
        }
    }
}

/// Why a config file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.limit.map(NonZeroUsize::get),
        }
    }
}

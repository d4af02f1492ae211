// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the wiki search index.
//!
//! A [`Record`] is one searchable entry of the wiki: a rule, a guide section,
//! a job page, a command or the FAQ. Records belong to exactly one
//! [`Category`], and the same enum drives the filter buttons of the search
//! modal through [`Filter`], so a category cannot exist on one side only.
//!
//! # Invariants
//!
//! - **Record**: immutable once built. The index hands out `&Record` only.
//! - **Category**: closed set. `Category::ALL[c.ordinal()] == c` for every
//!   variant; adding a variant without extending `ALL` fails the
//!   `all_covers_every_ordinal` test, and forgetting a label fails to compile.
//! - **Filter**: `All` admits every record, `Only(c)` admits records whose
//!   category is exactly `c`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CATEGORY
// =============================================================================

/// Section of the wiki a record belongs to.
///
/// Serialized lowercase (`"rules"`, `"guides"`, ...) to match the
/// `data-filter` attributes of the filter buttons and the catalog JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rules,
    Guides,
    Jobs,
    Commands,
    Faq,
}

impl Category {
    /// Every category, in filter-button order.
    pub const ALL: [Category; 5] = [
        Category::Rules,
        Category::Guides,
        Category::Jobs,
        Category::Commands,
        Category::Faq,
    ];

    /// Position of this category in [`Category::ALL`].
    pub const fn ordinal(self) -> usize {
        match self {
            Category::Rules => 0,
            Category::Guides => 1,
            Category::Jobs => 2,
            Category::Commands => 3,
            Category::Faq => 4,
        }
    }

    /// Attribute value used by filter buttons and the catalog format.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Rules => "rules",
            Category::Guides => "guides",
            Category::Jobs => "jobs",
            Category::Commands => "commands",
            Category::Faq => "faq",
        }
    }

    /// Display name shown above each result, in the page's language.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::Rules, Locale::Fr) => "Règlement",
            (Category::Rules, Locale::En) => "Rules",
            (Category::Rules, Locale::Es) => "Reglas",
            (Category::Guides, Locale::Fr) => "Guides",
            (Category::Guides, Locale::En) => "Guides",
            (Category::Guides, Locale::Es) => "Guías",
            (Category::Jobs, Locale::Fr) => "Métiers",
            (Category::Jobs, Locale::En) => "Jobs",
            (Category::Jobs, Locale::Es) => "Trabajos",
            (Category::Commands, Locale::Fr) => "Commandes",
            (Category::Commands, Locale::En) => "Commands",
            (Category::Commands, Locale::Es) => "Comandos",
            (Category::Faq, _) => "FAQ",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

// =============================================================================
// FILTER
// =============================================================================

/// Category restriction applied before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

/// A filter-button value that names neither `all` nor a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category filter '{0}' (expected all, rules, guides, jobs, commands or faq)")]
pub struct FilterParseError(pub String);

impl Filter {
    /// Filter buttons in display order: "all" first, then one per category.
    pub fn buttons() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Only))
    }

    /// Does this filter let `category` through?
    #[inline]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => c == category,
        }
    }

    /// Attribute value of the matching filter button.
    pub const fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(c) => c.as_str(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Filter::All),
            other => other.parse().map(Filter::Only),
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        Filter::Only(category)
    }
}

// =============================================================================
// LOCALE
// =============================================================================

/// Languages the wiki is published in. French lives at the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
    Es,
}

/// A locale name other than `fr`, `en` or `es`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected fr, en or es)")]
pub struct LocaleParseError(pub String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "root" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(LocaleParseError(other.to_string())),
        }
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One static, searchable wiki entry.
///
/// Field names match the catalog JSON shipped with the site, so a catalog file
/// deserializes straight into `Vec<Record>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub category: Category,
    pub description: String,
    /// Path plus optional fragment, e.g. `/rules#regles-gameplay`.
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A matched record with the information needed to rank and render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Position of the record in the index (the stable tiebreaker).
    pub position: usize,
    pub score: u32,
    pub record: &'a Record,
}

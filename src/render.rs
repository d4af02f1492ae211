// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Rendering: ranked hits in, a description of the results panel out.
//!
//! [`render_results`] is pure and knows nothing about the DOM. It produces a
//! [`ResultsView`], which the host can walk itself or serialize with
//! [`ResultsView::to_html`]. The HTML uses the class names the wiki's
//! stylesheet already targets:
//!
//! | Element              | Class                  |
//! |----------------------|------------------------|
//! | result row           | `search-result-item`   |
//! | selected row         | `selected`             |
//! | category badge       | `result-category`      |
//! | title                | `result-title`         |
//! | description          | `result-description`   |
//! | matched text         | `result-highlight`     |
//! | empty-result panel   | `no-results`           |
//!
//! All text and attribute values are HTML-escaped; record content is never
//! injected raw.

use crate::highlight::{segments, Segment};
use crate::search::is_searchable;
use crate::types::{Category, Hit, Locale};
use serde::Serialize;
use std::fmt::Write;

/// One row of the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    /// Row index, the value arrow keys move through.
    pub index: usize,
    pub url: String,
    pub category: Category,
    pub category_label: &'static str,
    pub title: Vec<Segment>,
    pub description: Vec<Segment>,
    pub selected: bool,
}

/// What the results panel should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultsView {
    /// Nothing typed yet (or fewer than two characters): hide the panel.
    Empty,
    /// A real query with zero hits.
    NoResults { message: String, hint: &'static str },
    Results { items: Vec<ResultItem> },
}

/// Build the results panel for `hits` of the normalized `query`.
pub fn render_results(
    hits: &[Hit<'_>],
    query: &str,
    locale: Locale,
    selected: Option<usize>,
) -> ResultsView {
    if !is_searchable(query) {
        return ResultsView::Empty;
    }
    if hits.is_empty() {
        return ResultsView::NoResults {
            message: no_results_message(query, locale),
            hint: no_results_hint(locale),
        };
    }

    let items = hits
        .iter()
        .enumerate()
        .map(|(index, hit)| ResultItem {
            index,
            url: hit.record.url.clone(),
            category: hit.record.category,
            category_label: hit.record.category.label(locale),
            title: segments(&hit.record.title, query),
            description: segments(&hit.record.description, query),
            selected: selected == Some(index),
        })
        .collect();
    ResultsView::Results { items }
}

fn no_results_message(query: &str, locale: Locale) -> String {
    match locale {
        Locale::Fr => format!("Aucun résultat trouvé pour \"{}\"", query),
        Locale::En => format!("No results found for \"{}\"", query),
        Locale::Es => format!("No se encontraron resultados para \"{}\"", query),
    }
}

fn no_results_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => "Essayez avec des mots-clés différents",
        Locale::En => "Try different keywords",
        Locale::Es => "Pruebe con otras palabras clave",
    }
}

impl ResultsView {
    /// Number of selectable rows.
    pub fn len(&self) -> usize {
        match self {
            ResultsView::Results { items } => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the view as the inner HTML of the results container.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        match self {
            ResultsView::Empty => {}
            ResultsView::NoResults { message, hint } => {
                let _ = write!(
                    html,
                    "<div class=\"no-results\"><i class=\"fas fa-search\"></i><p>{}</p><small>{}</small></div>",
                    escape_html(message),
                    escape_html(hint)
                );
            }
            ResultsView::Results { items } => {
                for item in items {
                    write_item(&mut html, item);
                }
            }
        }
        html
    }
}

fn write_item(html: &mut String, item: &ResultItem) {
    let class = if item.selected {
        "search-result-item selected"
    } else {
        "search-result-item"
    };
    let _ = write!(
        html,
        "<div class=\"{}\" data-index=\"{}\" data-url=\"{}\"><div class=\"result-category\">{}</div><div class=\"result-title\">",
        class,
        item.index,
        escape_html(&item.url),
        escape_html(item.category_label)
    );
    write_segments(html, &item.title);
    html.push_str("</div><div class=\"result-description\">");
    write_segments(html, &item.description);
    html.push_str("</div></div>");
}

fn write_segments(html: &mut String, segments: &[Segment]) {
    for segment in segments {
        if segment.highlighted {
            let _ = write!(
                html,
                "<span class=\"result-highlight\">{}</span>",
                escape_html(&segment.text)
            );
        } else {
            html.push_str(&escape_html(&segment.text));
        }
    }
}

/// Escape text for use in HTML content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wikisearch::catalog;
use wikisearch::{
    normalize_query, render_results, Category, Filter, ResultsView, SearchConfig, SearchIndex,
};

mod cli;
use cli::display::{
    category_badge, dim, highlighted, pad_right, row, score_value, section_bot, section_mid,
    section_top, themed, truncate, BOLD, GREEN, RED,
};
use cli::{Cli, CliError, Commands};

/// One hit in `search --json` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    title: &'a str,
    category: Category,
    category_label: &'static str,
    description: &'a str,
    url: &'a str,
    score: u32,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", themed(RED, &[BOLD], &format!("❌ {}", e)));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    tracing::debug!(?config, "search options");

    match cli.command {
        Commands::Search {
            query,
            filter,
            catalog,
            locale,
            limit,
            json,
        } => {
            if let Some(locale) = locale {
                config.locale = locale;
            }
            if limit.is_some() {
                config.limit = limit;
            }
            let index = load_index(catalog.as_deref())?;
            run_search(&index, &query, filter, &config, json)
        }
        Commands::List { filter, catalog } => {
            let index = load_index(catalog.as_deref())?;
            run_list(&index, filter, &config);
            Ok(())
        }
        Commands::Check { file } => run_check(&file, &config),
        Commands::Export { output, catalog } => run_export(&output, catalog.as_deref()),
    }
}

fn load_index(catalog: Option<&Path>) -> Result<SearchIndex, CliError> {
    match catalog {
        Some(path) => Ok(SearchIndex::load(path)?),
        None => Ok(SearchIndex::builtin()),
    }
}

fn run_search(
    index: &SearchIndex,
    query: &str,
    filter: Filter,
    config: &SearchConfig,
    json: bool,
) -> Result<(), CliError> {
    let hits = index.search_scored(query, filter, config.search_options());

    if json {
        let output: Vec<JsonHit<'_>> = hits
            .iter()
            .map(|hit| JsonHit {
                title: &hit.record.title,
                category: hit.record.category,
                category_label: hit.record.category.label(config.locale),
                description: &hit.record.description,
                url: &hit.record.url,
                score: hit.score,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let normalized = normalize_query(query);
    match render_results(&hits, &normalized, config.locale, None) {
        ResultsView::Empty => {
            eprintln!(
                "{}",
                dim(&format!(
                    "Query \"{}\" is too short: type at least {} characters",
                    query.trim(),
                    wikisearch::MIN_QUERY_LEN
                ))
            );
        }
        ResultsView::NoResults { message, hint } => {
            section_top("NO RESULTS");
            row(&format!(" {}", message));
            row(&format!(" {}", dim(hint)));
            section_bot();
        }
        ResultsView::Results { items } => {
            section_top(&format!(
                "{} RESULTS · \"{}\" · {}",
                items.len(),
                normalized,
                filter
            ));
            for (item, hit) in items.iter().zip(&hits) {
                row(&format!(
                    " {} {} {}",
                    score_value(hit.score),
                    category_badge(item.category, item.category_label),
                    highlighted(&item.title)
                ));
                row(&format!("    {}", dim(&item.url)));
            }
            section_bot();
        }
    }
    Ok(())
}

fn run_list(index: &SearchIndex, filter: Filter, config: &SearchConfig) {
    let mut opened = false;
    for category in Category::ALL.into_iter().filter(|c| filter.admits(*c)) {
        let label = format!(
            "{} ({})",
            category.label(config.locale).to_uppercase(),
            index.in_category(category).count()
        );
        if opened {
            section_mid(&label);
        } else {
            section_top(&label);
            opened = true;
        }
        for record in index.in_category(category) {
            row(&format!(
                " {} {}",
                pad_right(&truncate(&record.title, 36), 38),
                dim(&record.url)
            ));
        }
    }
    if opened {
        section_bot();
    }
}

fn run_check(file: &Path, config: &SearchConfig) -> Result<(), CliError> {
    let records = catalog::load(file)?;
    let report = catalog::check(&records);

    section_top("CATALOG");
    row(&format!(" {}", truncate(&file.display().to_string(), 60)));
    row(&format!(" {} records", report.total));
    section_mid("CATEGORIES");
    for category in Category::ALL {
        let count = report.count(category);
        let value = if count == 0 {
            themed(RED, &[BOLD], "0 (no results for this filter)")
        } else {
            themed(GREEN, &[], &count.to_string())
        };
        row(&format!(
            " {} {}",
            pad_right(category.label(config.locale), 14),
            value
        ));
    }
    section_bot();
    Ok(())
}

fn run_export(output: &Path, catalog_path: Option<&Path>) -> Result<(), CliError> {
    let records = match catalog_path {
        Some(path) => catalog::load(path)?,
        None => catalog::builtin_records(),
    };
    let path: PathBuf = catalog::export(&records, output)?;
    println!(
        "{} wrote {} records to {}",
        themed(GREEN, &[BOLD], "✓"),
        records.len(),
        path.display()
    );
    Ok(())
}

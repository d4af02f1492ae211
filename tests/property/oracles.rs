//! Obviously-correct reference implementations.
//!
//! Written for clarity, not speed: no shared helpers with the crate, no
//! early exits. If an oracle and the crate disagree, the oracle is right.

use wikisearch::{Filter, Record};

pub fn oracle_score(record: &Record, query: &str) -> u32 {
    let mut score = 0;
    if record.title.to_lowercase().contains(query) {
        score += 3;
    }
    if record.description.to_lowercase().contains(query) {
        score += 2;
    }
    let mut keyword_hit = false;
    for keyword in &record.keywords {
        if keyword.to_lowercase().contains(query) {
            keyword_hit = true;
        }
    }
    if keyword_hit {
        score += 1;
    }
    score
}

/// Indices into `records`, best first, ties by index.
pub fn oracle_search(records: &[Record], raw_query: &str, filter: Filter) -> Vec<usize> {
    let query = raw_query.trim().to_lowercase();
    if query.chars().count() < 2 {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, u32)> = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let admitted = match filter {
            Filter::All => true,
            Filter::Only(c) => record.category == c,
        };
        if !admitted {
            continue;
        }
        let text = format!(
            "{} {} {}",
            record.title,
            record.description,
            record.keywords.join(" ")
        )
        .to_lowercase();
        if text.contains(&query) {
            candidates.push((i, oracle_score(record, &query)));
        }
    }

    // Selection sort: highest score first, lowest index among equals
    let mut ordered = Vec::new();
    while !candidates.is_empty() {
        let mut best = 0;
        for j in 1..candidates.len() {
            let (bi, bs) = candidates[best];
            let (ci, cs) = candidates[j];
            if cs > bs || (cs == bs && ci < bi) {
                best = j;
            }
        }
        ordered.push(candidates.remove(best).0);
    }
    ordered
}

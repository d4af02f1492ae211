//! Relevance ranking: title 3, description 2, keywords 1, stable ties.

use super::common::{make_record, ranking_catalog, titles};
use wikisearch::scoring::{relevance, MAX_SCORE};
use wikisearch::{Category, Filter, SearchIndex, SearchOptions};

#[test]
fn test_fields_are_weighted_three_two_one() {
    let index = ranking_catalog();
    let hits = index.search_scored("marché", Filter::All, SearchOptions::default());
    let scored: Vec<(&str, u32)> = hits
        .iter()
        .map(|h| (h.record.title.as_str(), h.score))
        .collect();
    assert_eq!(
        scored,
        vec![
            ("Marché", 6),
            ("Marché Noir", 3),
            ("Gamma", 3),
            ("Beta", 2),
            ("Alpha", 1),
        ]
    );
}

#[test]
fn test_scores_never_exceed_max() {
    let index = ranking_catalog();
    for hit in index.search_scored("ma", Filter::All, SearchOptions::default()) {
        assert!(hit.score <= MAX_SCORE);
    }
}

#[test]
fn test_title_match_beats_keyword_only_match() {
    let index = SearchIndex::new(vec![
        make_record("Sanctions", Category::Rules, "Avertissements", &["discord"]),
        make_record("Discord", Category::Guides, "Rejoindre la communauté", &[]),
    ]);
    assert_eq!(
        titles(&index.search("discord", Filter::All)),
        vec!["Discord", "Sanctions"]
    );
}

#[test]
fn test_equal_scores_keep_index_order() {
    let index = SearchIndex::new(vec![
        make_record("Chauffeur de Taxi", Category::Jobs, "Transport", &[]),
        make_record("Chauffeur de Bus", Category::Jobs, "Transport", &[]),
        make_record("Chauffeur de Camion", Category::Jobs, "Transport", &[]),
    ]);
    assert_eq!(
        titles(&index.search("chauffeur", Filter::All)),
        vec!["Chauffeur de Taxi", "Chauffeur de Bus", "Chauffeur de Camion"]
    );
}

#[test]
fn test_several_keyword_matches_count_once() {
    let record = make_record("X", Category::Faq, "", &["aide", "aider", "aidez"]);
    assert_eq!(relevance(&record, "aide"), 1);
}

#[test]
fn test_keyword_case_does_not_matter() {
    let record = make_record("Serveur", Category::Guides, "Rejoindre", &["FiveM"]);
    assert_eq!(relevance(&record, "fivem"), 1);
}

#[test]
fn test_limit_keeps_the_best() {
    let index = ranking_catalog();
    let hits = index.search_scored("marché", Filter::All, SearchOptions { limit: Some(2) });
    let top: Vec<&str> = hits.iter().map(|h| h.record.title.as_str()).collect();
    assert_eq!(top, vec!["Marché", "Marché Noir"]);
}

//! End-to-end searches over the built-in wiki catalog.

use super::common::{wiki_titles, WIKI};
use wikisearch::{Category, Filter, SearchOptions};

#[test]
fn test_griefing_finds_only_the_rule() {
    let hits = WIKI.search_scored("griefing", Filter::All, SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.title, "Griefing Interdit");
    assert_eq!(hits[0].score, 4, "title + keyword");
    assert_eq!(hits[0].record.url, "/rules#regles-gameplay");
}

#[test]
fn test_transport_in_jobs() {
    assert_eq!(
        wiki_titles("transport", Filter::Only(Category::Jobs)),
        vec![
            "Chauffeur de Taxi",
            "Chauffeur de Bus",
            "Livreur",
            "Pilote d'Hélicoptère",
            "Chauffeur de Camion",
            "Pilote d'Avion",
            "Conducteur de Train",
        ]
    );
}

#[test]
fn test_transport_in_jobs_excludes_guides() {
    let jobs = wiki_titles("transport", Filter::Only(Category::Jobs));
    assert!(!jobs.iter().any(|t| t == "Choisir son Métier"));

    // Without the filter the guide comes back through "transporteur"
    let all = wiki_titles("transport", Filter::All);
    assert!(all.iter().any(|t| t == "Choisir son Métier"));
    assert_eq!(all.len(), jobs.len() + 1);
}

#[test]
fn test_aide_ranks_title_match_first() {
    assert_eq!(
        wiki_titles("aide", Filter::All),
        vec!["Entraide Encouragée", "/help", "Questions Fréquentes"]
    );
}

#[test]
fn test_keyword_written_in_mixed_case_is_found() {
    let hits = WIKI.search_scored("fivem", Filter::Only(Category::Guides), SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.title, "Comment Rejoindre le Serveur");
    assert_eq!(hits[0].score, 1);
}

#[test]
fn test_commands_search_by_slash() {
    let commands = wiki_titles("/t", Filter::Only(Category::Commands));
    assert_eq!(commands, vec!["/trade", "/team"]);
}

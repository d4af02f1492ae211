//! Category filter behavior.

use super::common::{make_record, titles, WIKI};
use wikisearch::{Category, Filter, SearchIndex};

#[test]
fn test_only_filter_restricts_every_result() {
    for category in Category::ALL {
        for query in ["le", "de", "transport", "serveur", "/t"] {
            for record in WIKI.search(query, Filter::Only(category)) {
                assert_eq!(
                    record.category, category,
                    "'{}' leaked into {} results for {:?}",
                    record.title, category, query
                );
            }
        }
    }
}

#[test]
fn test_all_is_union_of_categories() {
    let query = "joueur";
    let mut all = titles(&WIKI.search(query, Filter::All));
    let mut union: Vec<String> = Category::ALL
        .into_iter()
        .flat_map(|c| titles(&WIKI.search(query, Filter::Only(c))))
        .collect();
    all.sort();
    union.sort();
    assert_eq!(all, union);
}

#[test]
fn test_filter_on_empty_category_yields_nothing() {
    let index = SearchIndex::new(vec![
        make_record("Taxi", Category::Jobs, "Transport", &[]),
        make_record("Bus", Category::Jobs, "Transport", &[]),
    ]);
    assert!(index.search("transport", Filter::Only(Category::Faq)).is_empty());
    assert_eq!(index.search("transport", Filter::All).len(), 2);
}

#[test]
fn test_filter_buttons_match_categories() {
    let buttons: Vec<String> = Filter::buttons().map(|f| f.to_string()).collect();
    assert_eq!(buttons, vec!["all", "rules", "guides", "jobs", "commands", "faq"]);
    for button in &buttons {
        assert_eq!(button.parse::<Filter>().unwrap().to_string(), *button);
    }
}

#[test]
fn test_unknown_filter_name_is_an_error() {
    assert!("main".parse::<Filter>().is_err());
    assert!("".parse::<Filter>().is_err());
}

//! Generators for records, catalogs, queries and filters.

use proptest::prelude::*;
use wikisearch::{Category, Filter, Record};

/// Words mixing ASCII, French accents and upper case.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z]{2,8}").unwrap(),
        prop::sample::select(vec![
            "Métier".to_string(),
            "échange".to_string(),
            "Hélicoptère".to_string(),
            "joueurs".to_string(),
            "FiveM".to_string(),
            "/pay".to_string(),
            "[id]".to_string(),
            "Règlement".to_string(),
        ]),
    ]
}

pub fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..max_words).prop_map(|words| words.join(" "))
}

pub fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

pub fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        category_strategy().prop_map(Filter::Only),
    ]
}

pub fn record_strategy() -> impl Strategy<Value = Record> {
    (
        text_strategy(4).prop_filter("title must not be empty", |t| !t.trim().is_empty()),
        category_strategy(),
        text_strategy(8),
        prop::collection::vec(word_strategy(), 0..4),
        0u32..1000,
    )
        .prop_map(|(title, category, description, keywords, id)| Record {
            title,
            category,
            description,
            url: format!("/{}#r{}", category, id),
            keywords,
        })
}

pub fn catalog_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 1..12)
}

/// Free-form user input, including blanks and single characters.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        prop::string::string_regex("[a-zé ]{0,3}").unwrap(),
        prop::string::string_regex(".{0,6}").unwrap(),
    ]
}

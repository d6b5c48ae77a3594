use catalog::{Book, FilterCriteria, filter_books};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::sync::Arc;

const AUTHORS: &[&str] = &["austen", "dickens", "verne"];
const GENRES: &[&str] = &["classic", "romance", "adventure", "mystery"];
const WORDS: &[&str] = &["The", "the", "Island", "Sea", "Night", "HOUSE", "of", "Time"];

fn book_strategy() -> impl Strategy<Value = (String, usize, Vec<usize>)> {
    (
        prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|w| w.join(" ")),
        0..AUTHORS.len(),
        prop::collection::vec(0..GENRES.len(), 0..3),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Arc<Book>>> {
    prop::collection::vec(book_strategy(), 0..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (title, author, genres))| {
                Arc::new(Book {
                    id: format!("b{i}"),
                    title,
                    author: AUTHORS[author].to_string(),
                    image: String::new(),
                    description: String::new(),
                    published: Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
                    genres: genres.into_iter().map(|g| GENRES[g].to_string()).collect(),
                })
            })
            .collect()
    })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    let selection = |values: &'static [&'static str]| {
        prop_oneof![
            Just("any".to_string()),
            prop::sample::select(values).prop_map(str::to_string),
        ]
    };
    (
        selection(GENRES),
        prop_oneof![
            Just(String::new()),
            Just("  ".to_string()),
            prop::sample::select(WORDS).prop_map(str::to_string),
        ],
        selection(AUTHORS),
    )
        .prop_map(|(genre, title, author)| FilterCriteria::from_submission(&genre, &title, &author))
}

fn ids(books: &[Arc<Book>]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

proptest! {
    #[test]
    fn filter_is_an_order_preserving_subset(books in catalog_strategy(), criteria in criteria_strategy()) {
        let matches = filter_books(&books, &criteria);
        let all = ids(&books);
        let mut cursor = 0;
        for id in ids(&matches) {
            let position = all[cursor..].iter().position(|candidate| *candidate == id);
            prop_assert!(position.is_some(), "{} missing or out of order", id);
            cursor += position.unwrap() + 1;
        }
    }

    #[test]
    fn filter_is_idempotent(books in catalog_strategy(), criteria in criteria_strategy()) {
        let once = filter_books(&books, &criteria);
        let twice = filter_books(&once, &criteria);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn every_match_passes_and_every_rejection_fails(books in catalog_strategy(), criteria in criteria_strategy()) {
        let matched = ids(&filter_books(&books, &criteria));
        for book in &books {
            prop_assert_eq!(criteria.matches(book), matched.contains(&book.id));
        }
    }
}

#[test]
fn wildcard_criteria_return_the_full_catalog() {
    let books: Vec<Arc<Book>> = (0..3)
        .map(|i| {
            Arc::new(Book {
                id: format!("b{i}"),
                title: format!("Title {i}"),
                author: "austen".into(),
                image: String::new(),
                description: String::new(),
                published: Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
                genres: vec![],
            })
        })
        .collect();
    let matches = filter_books(&books, &FilterCriteria::from_submission("any", "", "any"));
    assert_eq!(ids(&matches), ids(&books));
}

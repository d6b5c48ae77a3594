use catalog::{Catalog, CatalogStore, Dataset, FilterCriteria};
use claims::assert_ok;
use proptest::prelude::*;
use std::io::Write;
use std::sync::Arc;

fn dataset_json(titles: &[&str], page_size: usize) -> String {
    let books: Vec<String> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            format!(
                r#"{{"id": "b{i}", "title": "{title}", "author": "a{}", "image": "https://example.org/{i}.jpg", "description": "d", "published": "1990-06-0{}T00:00:00Z", "genres": ["g{}"]}}"#,
                i % 2,
                (i % 9) + 1,
                i % 3
            )
        })
        .collect();
    format!(
        r#"{{"pageSize": {page_size}, "authors": {{"a0": "Ann", "a1": "Bob"}}, "genres": {{"g0": "Zero", "g1": "One", "g2": "Two"}}, "books": [{}]}}"#,
        books.join(",")
    )
}

fn store(titles: &[&str], page_size: usize) -> CatalogStore {
    let dataset = assert_ok!(Dataset::from_json(&dataset_json(titles, page_size)));
    CatalogStore::new(Arc::new(assert_ok!(Catalog::new(dataset))))
}

fn window_ids(window: &catalog::PageWindow) -> Vec<String> {
    window.books.iter().map(|b| b.id.clone()).collect()
}

#[test]
fn five_books_page_size_two() {
    let mut store = store(&["A", "B", "C", "D", "E"], 2);

    assert_eq!(window_ids(&store.first_page_window()), vec!["b0", "b1"]);
    assert_eq!(store.remaining_count(), 3);

    let next = store.next_page_window();
    store.advance_page();
    assert_eq!(window_ids(&next), vec!["b2", "b3"]);
    assert_eq!(store.remaining_count(), 1);

    let last = store.next_page_window();
    store.advance_page();
    assert_eq!(window_ids(&last), vec!["b4"]);
    assert_eq!(store.remaining_count(), 0);
}

#[test]
fn wildcard_submission_restores_everything_and_resets_page() {
    let mut store = store(&["A", "B", "C", "D", "E"], 2);
    store.apply_filter(FilterCriteria::any().with_title("c"));
    store.advance_page();
    store.apply_filter(FilterCriteria::from_submission("any", "", "any"));
    assert_eq!(store.matches().len(), 5);
    assert_eq!(store.page(), 1);
}

#[test]
fn title_filter_is_case_insensitive_in_catalog_order() {
    let mut store = store(
        &["The Road", "Anthem", "Dune", "Brother", "THE END", "Other"],
        10,
    );
    let matches = store.apply_filter(FilterCriteria::any().with_title("the"));
    let titles: Vec<&str> = matches.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["The Road", "Anthem", "Brother", "THE END", "Other"]);
}

#[test]
fn dataset_loads_from_file() {
    let mut file = assert_ok!(tempfile::NamedTempFile::new());
    assert_ok!(write!(file, "{}", dataset_json(&["Only"], 4)));
    let dataset = assert_ok!(Dataset::from_path(file.path()));
    assert_eq!(dataset.page_size, 4);
    assert_eq!(dataset.books.len(), 1);
}

proptest! {
    #[test]
    fn remaining_count_never_underflows(count in 0usize..60, page_size in 1usize..12, advances in 0usize..20) {
        let titles: Vec<String> = (0..count).map(|i| format!("T{i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut store = store(&refs, page_size);
        for _ in 0..advances {
            store.advance_page();
        }
        let expected = count.saturating_sub(store.page() * page_size);
        prop_assert_eq!(store.remaining_count(), expected);
        prop_assert!(store.next_page_window().len() <= page_size);
    }
}

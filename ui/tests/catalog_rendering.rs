use catalog::{Catalog, CatalogStore, Dataset, FilterCriteria, LookupError};
use claims::{assert_err, assert_matches, assert_ok};
use folio::app::renderer::CatalogRenderer;
use folio::components::book_list::NO_RESULTS_MESSAGE;
use folio::components::reactive::RenderPolicy;
use std::sync::Arc;

fn dataset_json(titles: &[&str]) -> String {
    let books: Vec<String> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            format!(
                r#"{{"id": "b{i}", "title": "{title}", "author": "a{}", "image": "https://example.org/{i}.jpg", "description": "About {title}", "published": "200{i}-03-01T00:00:00Z", "genres": ["g{}"]}}"#,
                i % 2,
                i % 2
            )
        })
        .collect();
    format!(
        r#"{{"pageSize": 2, "authors": {{"a0": "Ann", "a1": "Bob"}}, "genres": {{"g0": "Horror", "g1": "Poetry"}}, "books": [{}]}}"#,
        books.join(",")
    )
}

fn renderer(policy: RenderPolicy) -> CatalogRenderer {
    let titles = ["Dune", "Emma", "Ulysses", "Dracula", "Beloved"];
    let dataset = assert_ok!(Dataset::from_json(&dataset_json(&titles)));
    let catalog = Arc::new(assert_ok!(Catalog::new(dataset)));
    let mut renderer = assert_ok!(CatalogRenderer::new(CatalogStore::new(catalog), policy));
    assert_ok!(renderer.initial_render());
    renderer
}

fn listed_ids(renderer: &CatalogRenderer) -> Vec<String> {
    renderer
        .snapshot()
        .rows
        .iter()
        .map(|row| row.preview_id.clone())
        .collect()
}

#[test]
fn show_more_walks_five_books_in_pages_of_two() {
    let mut renderer = renderer(RenderPolicy::EveryWrite);
    assert_eq!(listed_ids(&renderer), ["b0", "b1"]);
    assert_eq!(renderer.show_more_control().remaining, 3);
    assert!(renderer.show_more_control().enabled);

    assert!(assert_ok!(renderer.show_more()));
    assert_eq!(renderer.show_more_control().remaining, 1);
    assert_eq!(renderer.list().len(), 4);

    assert!(assert_ok!(renderer.show_more()));
    assert_eq!(renderer.show_more_control().remaining, 0);
    assert!(!renderer.show_more_control().enabled);
    assert_eq!(listed_ids(&renderer), ["b0", "b1", "b2", "b3", "b4"]);

    // Disabled control is a no-op
    assert!(!assert_ok!(renderer.show_more()));
    assert_eq!(renderer.list().len(), 5);
    assert_eq!(renderer.list().batch_count(), 3);
}

#[test]
fn show_more_label_carries_the_remaining_count() {
    let renderer = renderer(RenderPolicy::OnChange);
    assert_eq!(renderer.show_more_control().label(), "show more (3)");
}

#[test]
fn search_replaces_the_list_with_the_first_matching_page() {
    let mut renderer = renderer(RenderPolicy::EveryWrite);
    assert_ok!(renderer.show_more());

    assert_ok!(renderer.submit_search(FilterCriteria::from_submission("g0", "", "any")));

    assert_eq!(listed_ids(&renderer), ["b0", "b2"]);
    assert_eq!(renderer.list().batch_count(), 1);
    assert_eq!(renderer.show_more_control().remaining, 1);
    assert!(!renderer.message_visible());
}

#[test]
fn empty_search_shows_the_message_and_disables_show_more() {
    let mut renderer = renderer(RenderPolicy::EveryWrite);

    assert_ok!(renderer.submit_search(FilterCriteria::any().with_title("zzz")));

    let snapshot = renderer.snapshot();
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.message_visible);
    assert_eq!(snapshot.total_matches, 0);
    assert!(!snapshot.show_more.enabled);
    assert!(NO_RESULTS_MESSAGE.starts_with("No results found"));
}

#[test]
fn wildcard_search_restores_the_full_catalog() {
    let mut renderer = renderer(RenderPolicy::EveryWrite);
    assert_ok!(renderer.submit_search(FilterCriteria::any().with_title("zzz")));

    assert_ok!(renderer.submit_search(FilterCriteria::from_submission("any", "", "any")));

    assert!(!renderer.message_visible());
    assert_eq!(listed_ids(&renderer), ["b0", "b1"]);
    assert_eq!(renderer.show_more_control().remaining, 3);
}

#[test]
fn title_search_ignores_case() {
    let mut renderer = renderer(RenderPolicy::EveryWrite);

    assert_ok!(renderer.submit_search(FilterCriteria::any().with_title("DR")));

    assert_eq!(listed_ids(&renderer), ["b3"]);
}

#[test]
fn detail_resolves_books_outside_the_current_matches() {
    let mut renderer = renderer(RenderPolicy::EveryWrite);
    assert_ok!(renderer.submit_search(FilterCriteria::any().with_author("a0")));

    let detail = assert_ok!(renderer.preview_detail("b1"));

    assert_eq!(detail.title, "Emma");
    assert_eq!(detail.subtitle, "Bob (2001)");
    assert_eq!(detail.description, "About Emma");
}

#[test]
fn detail_for_an_unknown_id_is_a_lookup_error() {
    let renderer = renderer(RenderPolicy::EveryWrite);

    let err = assert_err!(renderer.preview_detail("missing"));

    assert_matches!(err, LookupError::UnknownBook(ref id) if id == "missing");
}

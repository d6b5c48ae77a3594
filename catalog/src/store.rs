use crate::catalog::Catalog;
use crate::filter::{FilterCriteria, filter_books};
use crate::model::Book;
use std::sync::Arc;

/// A contiguous slice of the match set, as handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    /// Position of the first book within the match set
    pub start: usize,
    pub books: Vec<Arc<Book>>,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Position one past the last book within the match set.
    pub fn end(&self) -> usize {
        self.start + self.books.len()
    }
}

/// Filter and pagination state over a shared [`Catalog`].
///
/// `matches` changes only through [`CatalogStore::apply_filter`], which also
/// resets the page to 1. The page only grows through
/// [`CatalogStore::advance_page`].
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    matches: Vec<Arc<Book>>,
    page: usize,
    page_size: usize,
}

impl CatalogStore {
    /// Creates an unfiltered store on page 1 using the catalog's page size.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let page_size = catalog.page_size();
        Self::with_page_size(catalog, page_size)
    }

    /// Creates an unfiltered store with an explicit page size (clamped to at least 1).
    pub fn with_page_size(catalog: Arc<Catalog>, page_size: usize) -> Self {
        let matches = catalog.books().to_vec();
        Self {
            catalog,
            criteria: FilterCriteria::any(),
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn matches(&self) -> &[Arc<Book>] {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Recomputes the match set and resets pagination.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) -> &[Arc<Book>] {
        self.matches = filter_books(self.catalog.books(), &criteria);
        self.page = 1;
        log::debug!(
            "Filter {:?} matched {} of {} books",
            criteria,
            self.matches.len(),
            self.catalog.len()
        );
        self.criteria = criteria;
        &self.matches
    }

    pub fn first_page_window(&self) -> PageWindow {
        self.window(0)
    }

    /// The books that "show more" would reveal next. Does not move the cursor.
    pub fn next_page_window(&self) -> PageWindow {
        self.window(self.page.saturating_mul(self.page_size))
    }

    /// Moves the cursor forward one page after the caller consumed the next window.
    pub fn advance_page(&mut self) {
        self.page += 1;
    }

    /// Matches not yet revealed. Never negative.
    pub fn remaining_count(&self) -> usize {
        self.matches
            .len()
            .saturating_sub(self.page.saturating_mul(self.page_size))
    }

    fn window(&self, start: usize) -> PageWindow {
        let start = start.min(self.matches.len());
        let end = start.saturating_add(self.page_size).min(self.matches.len());
        PageWindow {
            start,
            books: self.matches[start..end].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use claims::assert_ok;

    fn store_with(count: usize, page_size: usize) -> CatalogStore {
        let books: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id": "b{i}", "title": "Book {i}", "author": "a", "image": "", "description": "", "published": "2000-01-01T00:00:00Z", "genres": []}}"#
                )
            })
            .collect();
        let raw = format!(
            r#"{{"pageSize": {page_size}, "authors": {{"a": "A"}}, "genres": {{}}, "books": [{}]}}"#,
            books.join(",")
        );
        let catalog = assert_ok!(Catalog::new(assert_ok!(Dataset::from_json(&raw))));
        CatalogStore::new(Arc::new(catalog))
    }

    #[test]
    fn next_window_does_not_move_cursor() {
        let store = store_with(5, 2);
        let first = store.next_page_window();
        let second = store.next_page_window();
        assert_eq!(first, second);
        assert_eq!(store.page(), 1);
        assert_eq!(first.start, 2);
    }

    #[test]
    fn windows_clamp_at_the_end() {
        let mut store = store_with(5, 2);
        store.advance_page();
        store.advance_page();
        assert_eq!(store.next_page_window().len(), 0);
        store.advance_page();
        assert!(store.next_page_window().is_empty());
        assert_eq!(store.remaining_count(), 0);
    }

    #[test]
    fn apply_filter_resets_page() {
        let mut store = store_with(5, 2);
        store.advance_page();
        store.apply_filter(FilterCriteria::any().with_title("book 3"));
        assert_eq!(store.page(), 1);
        assert_eq!(store.matches().len(), 1);
        assert_eq!(store.remaining_count(), 0);
        assert_eq!(store.criteria().title, "book 3");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let store = store_with(3, 1);
        let store = CatalogStore::with_page_size(store.catalog().clone(), 0);
        assert_eq!(store.page_size(), 1);
    }
}

use crate::dataset::Dataset;
use crate::errors::{CatalogError, LookupError};
use crate::model::{Book, LabelMap};
use std::collections::HashMap;
use std::sync::Arc;

/// The full, immutable book collection plus its author and genre registries.
///
/// Built once at startup. Book lookups go through an id → position index so
/// resolving a selected row never scans the collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Arc<Book>>,
    index: HashMap<String, usize>,
    authors: LabelMap,
    genres: LabelMap,
    page_size: usize,
}

/// Dangling references found while building a catalog.
///
/// These do not prevent loading; affected names render as
/// [`UNKNOWN_LABEL`](crate::UNKNOWN_LABEL).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// (book id, author id) pairs whose author is not registered
    pub unknown_authors: Vec<(String, String)>,
    /// (book id, genre id) pairs whose genre is not registered
    pub unknown_genres: Vec<(String, String)>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_authors.is_empty() && self.unknown_genres.is_empty()
    }
}

impl Catalog {
    pub fn new(dataset: Dataset) -> Result<Self, CatalogError> {
        if dataset.page_size == 0 {
            return Err(CatalogError::InvalidPageSize(0));
        }

        let mut index = HashMap::with_capacity(dataset.books.len());
        for (position, book) in dataset.books.iter().enumerate() {
            if index.insert(book.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
        }

        let catalog = Self {
            books: dataset.books.into_iter().map(Arc::new).collect(),
            index,
            authors: dataset.authors,
            genres: dataset.genres,
            page_size: dataset.page_size,
        };

        let report = catalog.integrity_report();
        for (book, author) in &report.unknown_authors {
            log::warn!("Book '{book}' references unknown author '{author}'");
        }
        for (book, genre) in &report.unknown_genres {
            log::warn!("Book '{book}' references unknown genre '{genre}'");
        }
        log::info!(
            "Catalog ready: {} books, {} authors, {} genres",
            catalog.books.len(),
            catalog.authors.len(),
            catalog.genres.len()
        );

        Ok(catalog)
    }

    /// All books in dataset order.
    pub fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn authors(&self) -> &LabelMap {
        &self.authors
    }

    pub fn genres(&self) -> &LabelMap {
        &self.genres
    }

    /// Resolves a book against the full catalog, regardless of any active filter.
    pub fn book(&self, id: &str) -> Result<&Arc<Book>, LookupError> {
        self.index
            .get(id)
            .and_then(|position| self.books.get(*position))
            .ok_or_else(|| LookupError::UnknownBook(id.to_string()))
    }

    pub fn author_name(&self, id: &str) -> Result<&str, LookupError> {
        self.authors
            .get(id)
            .ok_or_else(|| LookupError::UnknownAuthor(id.to_string()))
    }

    pub fn genre_name(&self, id: &str) -> Result<&str, LookupError> {
        self.genres
            .get(id)
            .ok_or_else(|| LookupError::UnknownGenre(id.to_string()))
    }

    pub fn integrity_report(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();
        for book in &self.books {
            if !self.authors.contains(&book.author) {
                report
                    .unknown_authors
                    .push((book.id.clone(), book.author.clone()));
            }
            for genre in &book.genres {
                if !self.genres.contains(genre) {
                    report.unknown_genres.push((book.id.clone(), genre.clone()));
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err_eq, assert_matches, assert_ok, assert_ok_eq};

    const SMALL: &str = r#"{
        "pageSize": 2,
        "authors": {"a1": "Ursula K. Le Guin", "a2": "Frank Herbert"},
        "genres": {"g1": "Science Fiction"},
        "books": [
            {"id": "b1", "title": "The Dispossessed", "author": "a1", "image": "", "description": "", "published": "1974-05-01T00:00:00Z", "genres": ["g1"]},
            {"id": "b2", "title": "Dune", "author": "a2", "image": "", "description": "", "published": "1965-08-01T00:00:00Z", "genres": ["g1", "g9"]},
            {"id": "b3", "title": "Ghost", "author": "a7", "image": "", "description": "", "published": "2001-01-01T00:00:00Z", "genres": []}
        ]
    }"#;

    fn small_catalog() -> Catalog {
        assert_ok!(Catalog::new(assert_ok!(Dataset::from_json(SMALL))))
    }

    #[test]
    fn book_lookup_uses_index() {
        let catalog = small_catalog();
        let book = assert_ok!(catalog.book("b2"));
        assert_eq!(book.title, "Dune");
        assert_err_eq!(catalog.book("nope"), LookupError::UnknownBook("nope".into()));
    }

    #[test]
    fn registry_lookups_are_typed() {
        let catalog = small_catalog();
        assert_ok_eq!(catalog.author_name("a2"), "Frank Herbert");
        assert_ok_eq!(catalog.genre_name("g1"), "Science Fiction");
        assert_err_eq!(
            catalog.author_name("a7"),
            LookupError::UnknownAuthor("a7".into())
        );
        assert_err_eq!(
            catalog.genre_name("g9"),
            LookupError::UnknownGenre("g9".into())
        );
    }

    #[test]
    fn integrity_report_lists_dangling_references() {
        let report = small_catalog().integrity_report();
        assert!(!report.is_clean());
        assert_eq!(
            report.unknown_authors,
            vec![("b3".to_string(), "a7".to_string())]
        );
        assert_eq!(
            report.unknown_genres,
            vec![("b2".to_string(), "g9".to_string())]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut dataset = assert_ok!(Dataset::from_json(SMALL));
        let copy = dataset.books[0].clone();
        dataset.books.push(copy);
        assert_matches!(Catalog::new(dataset), Err(CatalogError::DuplicateBook(id)) if id == "b1");
    }

    #[test]
    fn bundled_catalog_is_consistent() {
        let catalog = assert_ok!(Catalog::new(assert_ok!(Dataset::bundled())));
        assert!(catalog.integrity_report().is_clean());
        for book in catalog.books() {
            assert_ok!(catalog.book(&book.id));
        }
    }
}

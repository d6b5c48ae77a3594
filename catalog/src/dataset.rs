use crate::errors::CatalogError;
use crate::model::{Book, LabelMap};
use serde::Deserialize;
use std::path::Path;

/// Number of books revealed per page when a dataset does not say otherwise.
pub const BOOKS_PER_PAGE: usize = 36;

const BUNDLED_DATASET: &str = include_str!("../data/catalog.json");

/// Raw dataset as supplied by the data provider.
///
/// The document shape is:
///
/// ```json
/// { "pageSize": 36, "authors": {"id": "Name"}, "genres": {"id": "Name"}, "books": [...] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub authors: LabelMap,
    pub genres: LabelMap,
    pub books: Vec<Book>,
}

fn default_page_size() -> usize {
    BOOKS_PER_PAGE
}

impl Dataset {
    /// Loads the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        if dataset.page_size == 0 {
            return Err(CatalogError::InvalidPageSize(dataset.page_size));
        }
        log::debug!(
            "Parsed dataset: {} books, {} authors, {} genres, page size {}",
            dataset.books.len(),
            dataset.authors.len(),
            dataset.genres.len(),
            dataset.page_size
        );
        Ok(dataset)
    }

    /// Loads a dataset from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        log::info!("Loading dataset from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok};

    #[test]
    fn bundled_dataset_parses() {
        let dataset = assert_ok!(Dataset::bundled());
        assert!(!dataset.books.is_empty());
        assert_eq!(dataset.page_size, BOOKS_PER_PAGE);
    }

    #[test]
    fn page_size_defaults_when_missing() {
        let dataset = assert_ok!(Dataset::from_json(
            r#"{"authors": {}, "genres": {}, "books": []}"#
        ));
        assert_eq!(dataset.page_size, BOOKS_PER_PAGE);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = Dataset::from_json(r#"{"pageSize": 0, "authors": {}, "genres": {}, "books": []}"#);
        assert_matches!(result, Err(CatalogError::InvalidPageSize(0)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Dataset::from_path("/definitely/not/here.json");
        assert_matches!(result, Err(CatalogError::Io { .. }));
    }
}

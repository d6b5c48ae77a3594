use crate::model::Book;
use std::fmt;
use std::sync::Arc;

/// Wire value meaning "no restriction" for dropdown selections.
pub const ANY: &str = "any";

/// A dropdown selection: either the wildcard or one registry id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Parses a raw form value. The `"any"` sentinel and blank input both mean [`Selection::Any`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ANY {
            Selection::Any
        } else {
            Selection::Id(raw.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Id(id) => id == value,
        }
    }

    /// The value as submitted by a form, `"any"` for the wildcard.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the search form asks for.
///
/// All three predicates must pass for a book to match. An empty (after
/// trimming) title and [`Selection::Any`] are wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub genre: Selection,
    pub title: String,
    pub author: Selection,
}

impl FilterCriteria {
    /// Criteria that match every book.
    pub fn any() -> Self {
        Self::default()
    }

    /// Builds criteria from the raw strings of a search-form submission.
    pub fn from_submission(genre: &str, title: &str, author: &str) -> Self {
        Self {
            genre: Selection::parse(genre),
            title: title.to_string(),
            author: Selection::parse(author),
        }
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = Selection::parse(genre);
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Selection::parse(author);
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.genre == Selection::Any && self.author == Selection::Any && self.title.trim().is_empty()
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.matches_genre(book) && self.matches_title(book) && self.matches_author(book)
    }

    fn matches_genre(&self, book: &Book) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Id(genre) => book.has_genre(genre),
        }
    }

    fn matches_title(&self, book: &Book) -> bool {
        // Only emptiness is judged on the trimmed text; the substring itself is used as typed.
        if self.title.trim().is_empty() {
            return true;
        }
        book.title
            .to_lowercase()
            .contains(&self.title.to_lowercase())
    }

    fn matches_author(&self, book: &Book) -> bool {
        self.author.matches(&book.author)
    }
}

/// Returns the books that pass `criteria`, in catalog order.
pub fn filter_books(books: &[Arc<Book>], criteria: &FilterCriteria) -> Vec<Arc<Book>> {
    books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect()
}

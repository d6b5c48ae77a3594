use thiserror::Error;

/// Label shown in place of a registry name that could not be resolved.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Errors raised while loading a dataset into a [`Catalog`](crate::Catalog).
///
/// Loading happens once at startup, so every variant is terminal for the
/// caller: the application reports it and exits before drawing anything.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dataset document is not valid JSON or does not match the expected shape.
    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Two books share the same identifier, so the id index would be ambiguous.
    #[error("Duplicate book id '{0}' in dataset")]
    DuplicateBook(String),

    /// The dataset declares a page size that cannot paginate anything.
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),
}

/// A reference to a registry entry that does not exist.
///
/// Lookups never fail silently. Callers pick the fallback, which is usually
/// [`UNKNOWN_LABEL`] for display names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown book id '{0}'")]
    UnknownBook(String),

    #[error("Unknown author id '{0}'")]
    UnknownAuthor(String),

    #[error("Unknown genre id '{0}'")]
    UnknownGenre(String),
}

impl LookupError {
    /// The identifier that failed to resolve.
    pub fn id(&self) -> &str {
        match self {
            LookupError::UnknownBook(id)
            | LookupError::UnknownAuthor(id)
            | LookupError::UnknownGenre(id) => id,
        }
    }
}

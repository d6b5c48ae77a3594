//! # Folio Catalog Library
//!
//! Core library for the Folio book browser. It owns everything that does not
//! depend on a terminal: the book data model, dataset loading, filtering,
//! pagination and the night/day theme signals.
//!
//! ## Modules
//!
//! - [`model`] - Book records and ordered label registries
//! - [`dataset`] - Bundled and file-based dataset loading
//! - [`catalog`] - Immutable catalog with an id index and registry lookups
//! - [`filter`] - Filter criteria and the stable filter function
//! - [`store`] - Match set and pagination cursor
//! - [`theme`] - Theme modes, palette and the two color signals
//! - [`errors`] - Load and lookup error types

pub mod catalog;
pub mod dataset;
pub mod errors;
pub mod filter;
pub mod model;
pub mod store;
pub mod theme;

pub use catalog::Catalog;
pub use dataset::Dataset;
pub use errors::{CatalogError, LookupError, UNKNOWN_LABEL};
pub use filter::{FilterCriteria, Selection, filter_books};
pub use model::{Book, LabelMap};
pub use store::{CatalogStore, PageWindow};
pub use theme::{Ink, Mode, ThemeEngine};

//! # Folio UI Library
//!
//! Terminal book catalog browser built with Ratatui and tui-realm.
//!
//! ## Modules
//!
//! - [`app`] - Application model, catalog renderer and overlay control
//! - [`components`] - Reactive components, popups and the book list
//! - [`config`] - Configuration loading and validation
//! - [`constants`] - Environment variable names
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - File logging setup
//! - [`theme`] - Night/day theme manager and terminal colors
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod theme;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

pub use components::common::Msg;

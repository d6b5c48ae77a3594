//! # Theme System Module
//!
//! Night/day theming for the Folio terminal interface. The two theme signals
//! (dark ink and light ink) are owned by [`catalog::ThemeEngine`]; this module
//! wraps the engine in a global [`ThemeManager`] so drawing code can read
//! terminal colors derived from the current signals.
//!
//! ## Usage
//!
//! ```no_run
//! use folio::theme::{ThemeManager, preference, types::ThemePreference};
//!
//! let mode = preference::initial_mode(ThemePreference::System);
//! ThemeManager::init_global(mode)?;
//!
//! let text = ThemeManager::text_primary();
//! let mode = ThemeManager::with_global_mut(|manager| manager.toggle())?;
//! ```
//!
//! Accessors fall back to fixed colors when the manager is not initialized,
//! which keeps components drawable in tests.

pub mod manager;
pub mod preference;
pub mod types;

pub use manager::ThemeManager;
pub use types::{ThemeConfig, ThemePreference};

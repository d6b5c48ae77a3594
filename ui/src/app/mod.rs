//! # Application Module
//!
//! Model-view-update wiring for the catalog browser.
//!
//! - [`application_lifecycle`] - Startup, main loop and terminal teardown
//! - [`model`] - The tuirealm application, renderer and overlay state
//! - [`renderer`] - Paints catalog pages from the store into the list
//! - [`overlays`] - Open/closed phase of the search, settings and detail overlays
//! - [`updates`] - Message handlers grouped by activity
//! - [`view`] - Screen layout and overlay drawing
//!
//! ```no_run
//! use folio::app::application_lifecycle::{ApplicationLifecycle, LaunchOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let model = ApplicationLifecycle::initialize(&LaunchOptions::default())?;
//!     ApplicationLifecycle::run(model)
//! }
//! ```

pub mod application_lifecycle;
pub mod model;
pub mod overlays;
pub mod renderer;
pub mod updates;
pub mod view;

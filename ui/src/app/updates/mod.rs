//! Message handlers, one file per activity.

mod books;
mod overlay;
mod popup;
mod theme;

// Core components
pub mod common;
pub mod reactive;
pub mod state;

// Reusable patterns and utilities
pub mod base_popup;

// Reactive components
pub mod book_preview;
pub mod search_filter;
pub mod toggle_theme;

// Popup components
pub mod detail_popup;
pub mod error_popup;
pub mod search_popup;
pub mod settings_popup;
pub mod warning_popup;

// Display components
pub mod book_list;
pub mod help_bar;
pub mod text_label;

// System components
pub mod global_key_watcher;

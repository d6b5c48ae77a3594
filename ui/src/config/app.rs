use super::{
    LoggingConfig,
    keys::KeyBindingsConfig,
    ui::{CatalogConfig, UIConfig},
};
use crate::theme::ThemeConfig;
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    page_size: Option<usize>,
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,

    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    catalog: CatalogConfig,
    #[serde(default)]
    ui: UIConfig,
}

impl AppConfig {
    /// Page size override; `None` keeps the dataset's own page size
    pub fn configured_page_size(&self) -> Option<usize> {
        self.page_size
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(20))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(10)
    }

    pub fn poll_timeout_ms(&self) -> u64 {
        self.poll_timeout_ms.unwrap_or(10)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms())
    }

    pub fn tick_interval_millis(&self) -> u64 {
        self.tick_interval_millis.unwrap_or(250)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis())
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    pub fn ui(&self) -> &UIConfig {
        &self.ui
    }
}

use super::app::AppConfig;
use super::limits::*;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid page_size: {configured} (min: {min_limit}, max: {max_limit})")]
    PageSize {
        configured: usize,
        min_limit: usize,
        max_limit: usize,
    },
    #[error("Invalid poll_timeout_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    PollTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid tick_interval_millis: {configured} (limit: {limit})")]
    TickInterval { configured: u64, limit: u64 },
    #[error("Key '{key}' is bound to both {first} and {second}")]
    DuplicateKey {
        key: char,
        first: &'static str,
        second: &'static str,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::PageSize {
                configured,
                min_limit,
                max_limit,
            } => format!(
                "Page size out of range!\n\n\
                Your configured value: {configured}\n\
                Valid range: {min_limit} - {max_limit}\n\n\
                Please update page_size in config.toml to a value between {min_limit} and {max_limit}."
            ),
            ConfigValidationError::PollTimeout {
                configured,
                min_limit,
                max_limit,
            } => format!(
                "Poll timeout out of range!\n\n\
                Your configured value: {configured} ms\n\
                Valid range: {min_limit} - {max_limit} ms\n\n\
                Please update poll_timeout_ms in config.toml."
            ),
            ConfigValidationError::TickInterval { configured, limit } => format!(
                "Tick interval too high!\n\n\
                Your configured value: {configured} ms\n\
                Recommended maximum: {limit} ms\n\n\
                Please update tick_interval_millis in config.toml."
            ),
            ConfigValidationError::DuplicateKey { key, first, second } => format!(
                "Conflicting key bindings!\n\n\
                '{key}' is used by both {first} and {second}.\n\n\
                Please give each action its own key in the [keys] section of config.toml."
            ),
        }
    }
}

/// Outcome of loading the configuration.
#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Some(page_size) = self.configured_page_size() {
            if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
                errors.push(ConfigValidationError::PageSize {
                    configured: page_size,
                    min_limit: MIN_PAGE_SIZE,
                    max_limit: MAX_PAGE_SIZE,
                });
            }
        }

        let poll_timeout = self.poll_timeout_ms();
        if !(MIN_POLL_TIMEOUT_MS..=MAX_POLL_TIMEOUT_MS).contains(&poll_timeout) {
            errors.push(ConfigValidationError::PollTimeout {
                configured: poll_timeout,
                min_limit: MIN_POLL_TIMEOUT_MS,
                max_limit: MAX_POLL_TIMEOUT_MS,
            });
        }

        if self.tick_interval_millis() > MAX_TICK_INTERVAL_MS {
            errors.push(ConfigValidationError::TickInterval {
                configured: self.tick_interval_millis(),
                limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let bindings = self.keys().named_bindings();
        for (i, (first, key)) in bindings.iter().enumerate() {
            if let Some((second, _)) = bindings[i + 1..].iter().find(|(_, other)| other == key) {
                errors.push(ConfigValidationError::DuplicateKey {
                    key: *key,
                    first: *first,
                    second: *second,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

use crate::constants::env_vars::FOLIO_CONFIG_DIR;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub mod app;
pub mod keys;
pub mod limits;
pub mod ui;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Global configuration, loaded once at startup
static CONFIG: OnceLock<ConfigLoadResult> = OnceLock::new();

const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory holding the user-level `config.toml`.
///
/// `FOLIO_CONFIG_DIR` overrides the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(FOLIO_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("folio"))
}

/// Loads configuration from files and environment variables.
///
/// With an explicit `path` that file is mandatory. Otherwise the user config
/// directory and the working directory are searched, both optional, with
/// the working directory taking precedence. Environment entries override
/// file values (`__` separates sections, e.g. `THEME__MODE=day`).
pub fn load_config_from(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    match path {
        Some(path) => {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        None => {
            if let Some(dir) = config_dir() {
                builder = builder.add_source(File::from(dir.join(CONFIG_FILE_NAME)).required(false));
            }
            builder = builder.add_source(File::with_name(CONFIG_FILE_NAME).required(false));
        }
    }

    let config = match builder
        .add_source(Environment::default().separator("__"))
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Loads the global configuration. Later calls return the first result.
pub fn init_config(path: Option<&Path>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config_from(path))
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config_from(None))
}

/// `[logging]` section of the configuration file
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reactive::RenderPolicy;
    use crate::theme::ThemePreference;
    use claims::{assert_matches, assert_ok, assert_some_eq};
    use std::io::Write;

    fn load(contents: &str) -> ConfigLoadResult {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        write!(file, "{contents}").expect("write config");
        load_config_from(Some(file.path()))
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let ConfigLoadResult::Success(config) = load("") else {
            panic!("expected success");
        };
        assert_eq!(config.configured_page_size(), None);
        assert_eq!(config.keys().search(), '/');
        assert_eq!(config.keys().toggle_theme(), 't');
        assert_eq!(config.logging().level(), "info");
        assert_eq!(config.theme().mode, ThemePreference::System);
        assert_eq!(config.ui().render_policy(), RenderPolicy::EveryWrite);
        assert_ok!(config.validate());
    }

    #[test]
    fn test_sections_are_read() {
        let ConfigLoadResult::Success(config) = load(
            r#"
page_size = 12

[theme]
mode = "day"

[ui]
render_policy = "on_change"

[catalog]
dataset_path = "books.json"

[keys]
key_show_more = "n"
"#,
        ) else {
            panic!("expected success");
        };
        assert_some_eq!(config.configured_page_size(), 12);
        assert_eq!(config.theme().mode, ThemePreference::Day);
        assert_eq!(config.ui().render_policy(), RenderPolicy::OnChange);
        assert_some_eq!(config.catalog().dataset_path(), "books.json");
        assert_eq!(config.keys().show_more(), 'n');
    }

    #[test]
    fn test_validation_reports_every_problem() {
        let ConfigLoadResult::Success(config) = load(
            r#"
page_size = 0
poll_timeout_ms = 5000

[keys]
key_search = "q"
"#,
        ) else {
            panic!("expected success");
        };
        let errors = config.validate().expect_err("invalid config");
        assert_eq!(errors.len(), 3);
        assert_matches!(&errors[0], ConfigValidationError::PageSize { configured: 0, .. });
        assert_matches!(&errors[1], ConfigValidationError::PollTimeout { configured: 5000, .. });
        assert_matches!(
            &errors[2],
            ConfigValidationError::DuplicateKey { key: 'q', first: "key_quit", second: "key_search" }
        );
        assert!(errors[2].user_message().contains("Conflicting key bindings"));
    }

    #[test]
    fn test_bad_values_are_deserialize_errors() {
        assert_matches!(
            load("[theme]\nmode = \"dusk\"\n"),
            ConfigLoadResult::DeserializeError(_)
        );
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        assert_matches!(
            load_config_from(Some(Path::new("/no/such/folio.toml"))),
            ConfigLoadResult::LoadError(_)
        );
    }
}

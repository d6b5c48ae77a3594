//! Application lifecycle management
//!
//! Startup (configuration, logging, dataset, theme), the main loop, and
//! terminal teardown.

use crate::app::model::Model;
use crate::app::renderer::CatalogRenderer;
use crate::components::common::Msg;
use crate::config::{self, AppConfig, ConfigLoadResult};
use crate::error::AppError;
use crate::logger::setup_logger;
use crate::theme::ThemeManager;
use crate::theme::preference::initial_mode;

use anyhow::{Context, bail};
use catalog::{Catalog, CatalogStore, Dataset, Mode};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter};

/// Command-line overrides that apply on top of the configuration
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub dataset: Option<PathBuf>,
    pub theme: Option<Mode>,
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Initialize the application and return the configured model
    pub fn initialize(options: &LaunchOptions) -> anyhow::Result<Model<CrosstermTerminalAdapter>> {
        let config = Self::load_configuration()?;
        Self::validate_configuration(config)?;

        setup_logger(config.logging()).context("Failed to install logger")?;
        info!("Starting Folio");

        let catalog = Arc::new(Self::load_catalog(config, options)?);
        let mode = Self::resolve_mode(config, options);
        ThemeManager::init_global(mode).map_err(anyhow::Error::msg)?;

        let store = match config.configured_page_size() {
            Some(page_size) => CatalogStore::with_page_size(catalog, page_size),
            None => CatalogStore::new(catalog),
        };
        let renderer =
            CatalogRenderer::new(store, config.ui().render_policy()).map_err(anyhow::Error::msg)?;

        let model = Model::new(renderer, config).map_err(anyhow::Error::msg)?;
        info!("Model initialized successfully");
        Ok(model)
    }

    fn load_configuration() -> anyhow::Result<&'static AppConfig> {
        match config::get_config() {
            ConfigLoadResult::Success(config) => Ok(config.as_ref()),
            ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
                bail!("{e}")
            }
        }
    }

    fn validate_configuration(config: &AppConfig) -> anyhow::Result<()> {
        if let Err(validation_errors) = config.validate() {
            let messages: Vec<String> = validation_errors
                .iter()
                .map(|e| e.user_message())
                .collect();
            bail!(
                "Configuration validation failed:\n\n{}",
                messages.join("\n\n")
            );
        }
        Ok(())
    }

    /// The `--dataset` flag wins over `catalog.dataset_path`; without either
    /// the bundled dataset is used.
    fn load_catalog(config: &AppConfig, options: &LaunchOptions) -> anyhow::Result<Catalog> {
        let path = options
            .dataset
            .clone()
            .or_else(|| config.catalog().dataset_path().map(PathBuf::from));

        let dataset = match &path {
            Some(path) => Dataset::from_path(path)
                .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
            None => Dataset::bundled().context("Failed to parse bundled dataset")?,
        };

        let catalog = Catalog::new(dataset).context("Dataset rejected")?;
        Ok(catalog)
    }

    fn resolve_mode(config: &AppConfig, options: &LaunchOptions) -> Mode {
        let mode = options
            .theme
            .unwrap_or_else(|| initial_mode(config.theme().mode));
        debug!("Starting in {mode} mode");
        mode
    }

    /// Sets up the terminal, runs the loop, and always tears the terminal
    /// down again, even when setup itself failed.
    pub fn run<T: TerminalAdapter>(mut model: Model<T>) -> anyhow::Result<()> {
        let result = Self::setup_terminal(&mut model)
            .context("Failed to set up terminal")
            .and_then(|()| Self::run_application_loop(&mut model));
        Self::shutdown_application(model)?;
        result
    }

    /// Setup terminal for application use
    pub fn setup_terminal<T: TerminalAdapter>(model: &mut Model<T>) -> anyhow::Result<()> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| anyhow::anyhow!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop<T: TerminalAdapter>(model: &mut Model<T>) -> anyhow::Result<()> {
        info!("Entering main application loop");

        while !model.quit {
            Self::process_single_iteration(model);
        }

        Ok(())
    }

    fn process_single_iteration<T: TerminalAdapter>(model: &mut Model<T>) {
        model.update_outside_msg();

        match model.app.tick(PollStrategy::Once) {
            Err(err) => Self::handle_tick_error(model, err),
            Ok(messages) if !messages.is_empty() => Self::process_messages(model, messages),
            _ => {}
        }

        Self::handle_redraw(model);
    }

    fn handle_tick_error<T: TerminalAdapter>(model: &mut Model<T>, err: tuirealm::ApplicationError) {
        error!("Application tick error: {err:?}");
        if let Err(e) = model.mount_error_popup(&AppError::from(err)) {
            model
                .error_reporter
                .report_mount_error("ErrorPopup", "mount", e);
        }
        model.set_redraw(true);
    }

    fn process_messages<T: TerminalAdapter>(model: &mut Model<T>, messages: Vec<Msg>) {
        model.set_redraw(true);
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    fn handle_redraw<T: TerminalAdapter>(model: &mut Model<T>) {
        if !model.redraw {
            return;
        }
        if let Err(e) = model.view() {
            error!("Error during view rendering: {e}");
            if let Err(popup_err) = model.mount_error_popup(&e) {
                warn!("Failed to show rendering error: {popup_err}");
            }
        }
        model.set_redraw(false);
    }

    /// Properly shutdown the application
    pub fn shutdown_application<T: TerminalAdapter>(mut model: Model<T>) -> anyhow::Result<()> {
        info!("Application shutdown initiated");
        model.shutdown();

        debug!("Leaving alternate screen");
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }
}

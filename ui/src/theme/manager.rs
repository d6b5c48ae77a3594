use crate::error::{AppError, AppResult};
use crate::theme::types::ThemeColors;
use catalog::{Ink, Mode, ThemeEngine};
use once_cell::sync::OnceCell;
use std::sync::Mutex;

use tuirealm::props::Color;

// Global theme manager instance, wrapped in Mutex so the toggle can update it
static GLOBAL_THEME_MANAGER: OnceCell<Mutex<ThemeManager>> = OnceCell::new();

// Fallback colors for when the manager is not initialized or busy
mod fallback_colors {
    use tuirealm::props::Color;

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::Gray;
    pub const SURFACE: Color = Color::Reset;
    pub const PRIMARY_ACCENT: Color = Color::Cyan;
    pub const TITLE_ACCENT: Color = Color::LightCyan;
    pub const HEADER_ACCENT: Color = Color::Blue;
    pub const SELECTION_BG: Color = Color::DarkGray;
    pub const SELECTION_FG: Color = Color::White;
    pub const STATUS_WARNING: Color = Color::Yellow;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const SHORTCUT_KEY: Color = Color::LightCyan;
    pub const SHORTCUT_DESCRIPTION: Color = Color::Gray;
}

/// Owns the [`ThemeEngine`] and maps its two signals to terminal colors.
pub struct ThemeManager {
    engine: ThemeEngine,
    colors: ThemeColors,
}

impl ThemeManager {
    pub fn new(mode: Mode) -> Self {
        let engine = ThemeEngine::new(mode);
        let colors = derive_colors(&engine);
        Self { engine, colors }
    }

    /// Initialize the global theme manager - call this once at app startup
    pub fn init_global(mode: Mode) -> AppResult<()> {
        GLOBAL_THEME_MANAGER
            .set(Mutex::new(Self::new(mode)))
            .map_err(|_| AppError::Theme("Theme manager already initialized".to_string()))?;

        log::info!("Global theme manager initialized in {mode} mode");
        Ok(())
    }

    /// Get the global theme manager instance
    pub fn global() -> AppResult<&'static Mutex<ThemeManager>> {
        GLOBAL_THEME_MANAGER.get().ok_or_else(|| {
            AppError::Theme(
                "Theme manager not initialized. Call ThemeManager::init_global() first."
                    .to_string(),
            )
        })
    }

    pub fn engine(&self) -> &ThemeEngine {
        &self.engine
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// Writes both signals for `mode` and refreshes the derived colors.
    pub fn set_theme(&mut self, mode: Mode) {
        self.engine.set_theme(mode);
        self.colors = derive_colors(&self.engine);
    }

    /// Flips the mode through the engine's accessor and returns the new mode.
    pub fn toggle(&mut self) -> Mode {
        let mode = self.engine.toggle();
        self.colors = derive_colors(&self.engine);
        mode
    }

    /// Runs `f` against the global manager with the lock held.
    pub fn with_global_mut<F, R>(f: F) -> AppResult<R>
    where
        F: FnOnce(&mut ThemeManager) -> R,
    {
        let mutex = Self::global()?;
        let mut manager = mutex
            .lock()
            .map_err(|e| AppError::Theme(format!("Theme manager lock poisoned: {e}")))?;
        Ok(f(&mut manager))
    }

    /// Current mode of the global manager, night when unavailable.
    pub fn current_mode() -> Mode {
        Self::with_theme_manager(|manager| manager.engine.mode(), Mode::Night)
    }

    /// Settings-form value of the global manager, night when unavailable.
    pub fn current_settings_value() -> Mode {
        Self::with_theme_manager(|manager| manager.engine.settings_value(), Mode::Night)
    }

    /// Safe helper function to access the theme manager with fallback
    fn with_theme_manager<F, R>(f: F, fallback: R) -> R
    where
        F: FnOnce(&ThemeManager) -> R,
    {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager_mutex) => match manager_mutex.try_lock() {
                Ok(manager) => f(&manager),
                Err(_) => {
                    log::warn!("Theme manager lock contention, using fallback");
                    fallback
                }
            },
            None => fallback,
        }
    }

    fn get_theme_color<F>(color_getter: F, fallback: Color) -> Color
    where
        F: FnOnce(&ThemeColors) -> Color,
    {
        Self::with_theme_manager(|manager| color_getter(&manager.colors), fallback)
    }
}

fn rgb(ink: Ink) -> Color {
    let (r, g, b) = ink.rgb();
    Color::Rgb(r, g, b)
}

/// Linear blend of two inks, `weight` parts of `a` out of 10.
fn blend(a: Ink, b: Ink, weight: u16) -> Color {
    let mix = |x: u8, y: u8| ((x as u16 * weight + y as u16 * (10 - weight)) / 10) as u8;
    Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn derive_colors(engine: &ThemeEngine) -> ThemeColors {
    let dark = engine.dark_ink();
    let light = engine.light_ink();
    let (primary, title, header) = match engine.mode() {
        Mode::Night => (
            Color::Rgb(0, 150, 255),
            Color::Rgb(120, 200, 255),
            Color::Rgb(90, 160, 240),
        ),
        Mode::Day => (
            Color::Rgb(0, 100, 190),
            Color::Rgb(10, 70, 140),
            Color::Rgb(30, 90, 170),
        ),
    };

    ThemeColors {
        text_primary: rgb(dark),
        surface: rgb(light),
        text_muted: blend(dark, light, 6),
        selection_bg: blend(dark, light, 2),
        selection_fg: rgb(dark),
        primary_accent: primary,
        title_accent: title,
        header_accent: header,
        status_warning: Color::Rgb(220, 160, 0),
        status_error: Color::Rgb(220, 60, 60),
        shortcut_key: title,
        shortcut_description: blend(dark, light, 6),
    }
}

// Generates a static accessor that reads the global manager's derived colors
macro_rules! theme_accessor {
    ($method:ident, $fallback:expr) => {
        impl ThemeManager {
            pub fn $method() -> Color {
                Self::get_theme_color(|colors| colors.$method, $fallback)
            }
        }
    };
}

theme_accessor!(text_primary, fallback_colors::TEXT_PRIMARY);
theme_accessor!(text_muted, fallback_colors::TEXT_MUTED);
theme_accessor!(surface, fallback_colors::SURFACE);
theme_accessor!(primary_accent, fallback_colors::PRIMARY_ACCENT);
theme_accessor!(title_accent, fallback_colors::TITLE_ACCENT);
theme_accessor!(header_accent, fallback_colors::HEADER_ACCENT);
theme_accessor!(selection_bg, fallback_colors::SELECTION_BG);
theme_accessor!(selection_fg, fallback_colors::SELECTION_FG);
theme_accessor!(status_warning, fallback_colors::STATUS_WARNING);
theme_accessor!(status_error, fallback_colors::STATUS_ERROR);
theme_accessor!(shortcut_key, fallback_colors::SHORTCUT_KEY);
theme_accessor!(shortcut_description, fallback_colors::SHORTCUT_DESCRIPTION);

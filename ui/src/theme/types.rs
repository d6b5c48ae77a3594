use serde::Deserialize;
use tuirealm::props::Color;

/// Where the initial theme mode comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the terminal's color-scheme hint
    #[default]
    System,
    Night,
    Day,
}

/// `[theme]` section of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemePreference,
}

/// Terminal colors derived from the two theme signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    // === Signals ===
    pub text_primary: Color,
    pub surface: Color,

    // === Derived ===
    pub text_muted: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // === Accents ===
    pub primary_accent: Color,
    pub title_accent: Color,
    pub header_accent: Color,

    // === Status ===
    pub status_warning: Color,
    pub status_error: Color,

    // === Help bar ===
    pub shortcut_key: Color,
    pub shortcut_description: Color,
}

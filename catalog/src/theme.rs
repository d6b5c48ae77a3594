use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Night,
    Day,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Night, Mode::Day];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Night => "night",
            Mode::Day => "day",
        }
    }

    pub fn opposite(self) -> Mode {
        match self {
            Mode::Night => Mode::Day,
            Mode::Day => Mode::Night,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme mode '{0}', expected 'night' or 'day'")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "night" => Ok(Mode::Night),
            "day" => Ok(Mode::Day),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// An RGB color signal. Displays as `"r, g, b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ink(pub u8, pub u8, pub u8);

impl Ink {
    pub const WHITE: Ink = Ink(255, 255, 255);
    pub const INK_BLACK: Ink = Ink(10, 10, 20);

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl fmt::Display for Ink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Signal values for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub dark: Ink,
    pub light: Ink,
}

/// The fixed two-entry palette.
pub fn palette(mode: Mode) -> PaletteEntry {
    match mode {
        Mode::Night => PaletteEntry {
            dark: Ink::WHITE,
            light: Ink::INK_BLACK,
        },
        Mode::Day => PaletteEntry {
            dark: Ink::INK_BLACK,
            light: Ink::WHITE,
        },
    }
}

/// Owner of the dark-ink and light-ink signals.
///
/// The mode is tracked explicitly, so toggling never infers it from the
/// color values. `settings_value` mirrors what the settings form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEngine {
    dark_ink: Ink,
    light_ink: Ink,
    mode: Mode,
    settings_value: Mode,
}

impl ThemeEngine {
    pub fn new(initial: Mode) -> Self {
        let entry = palette(initial);
        Self {
            dark_ink: entry.dark,
            light_ink: entry.light,
            mode: initial,
            settings_value: initial,
        }
    }

    /// Writes both signals from the palette and mirrors the mode into the settings value.
    pub fn set_theme(&mut self, mode: Mode) {
        let entry = palette(mode);
        self.dark_ink = entry.dark;
        self.light_ink = entry.light;
        self.mode = mode;
        self.settings_value = mode;
        log::info!("Theme set to {mode} (dark ink {}, light ink {})", entry.dark, entry.light);
    }

    /// Flips to the other mode and returns it.
    pub fn toggle(&mut self) -> Mode {
        let next = self.mode().opposite();
        self.set_theme(next);
        next
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn settings_value(&self) -> Mode {
        self.settings_value
    }

    pub fn dark_ink(&self) -> Ink {
        self.dark_ink
    }

    pub fn light_ink(&self) -> Ink {
        self.light_ink
    }

    /// Overrides the dark-ink signal directly. The mode is left unchanged.
    pub fn set_dark_ink(&mut self, ink: Ink) {
        self.dark_ink = ink;
    }

    /// Overrides the light-ink signal directly. The mode is left unchanged.
    pub fn set_light_ink(&mut self, ink: Ink) {
        self.light_ink = ink;
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(Mode::Night)
    }
}

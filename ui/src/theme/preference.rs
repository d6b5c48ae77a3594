use super::types::ThemePreference;
use crate::constants::env_vars::COLORFGBG;
use catalog::Mode;

/// Resolves the mode to start in.
///
/// An explicit `night`/`day` preference wins. `system` reads the terminal's
/// `COLORFGBG` hint; without one the terminal is assumed not to prefer dark.
pub fn initial_mode(preference: ThemePreference) -> Mode {
    match preference {
        ThemePreference::Night => Mode::Night,
        ThemePreference::Day => Mode::Day,
        ThemePreference::System => {
            let hint = std::env::var(COLORFGBG).ok();
            let mode = mode_from_colorfgbg(hint.as_deref());
            log::debug!("Terminal color hint {hint:?} resolved to {mode} mode");
            mode
        }
    }
}

/// Interprets a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
///
/// The last field is the background palette index; 0-6 and 8 are dark.
pub fn mode_from_colorfgbg(value: Option<&str>) -> Mode {
    let background = value
        .and_then(|raw| raw.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6) | Some(8) => Mode::Night,
        _ => Mode::Day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_backgrounds_prefer_night() {
        assert_eq!(mode_from_colorfgbg(Some("15;0")), Mode::Night);
        assert_eq!(mode_from_colorfgbg(Some("7;default;8")), Mode::Night);
    }

    #[test]
    fn light_or_missing_backgrounds_prefer_day() {
        assert_eq!(mode_from_colorfgbg(Some("0;15")), Mode::Day);
        assert_eq!(mode_from_colorfgbg(Some("0;7")), Mode::Day);
        assert_eq!(mode_from_colorfgbg(Some("garbage")), Mode::Day);
        assert_eq!(mode_from_colorfgbg(None), Mode::Day);
    }

    #[test]
    fn explicit_preference_wins() {
        assert_eq!(initial_mode(ThemePreference::Night), Mode::Night);
        assert_eq!(initial_mode(ThemePreference::Day), Mode::Day);
    }
}

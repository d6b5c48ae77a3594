/// Environment variable name constants.

// Terminal color-scheme hint ("fg;bg"), read when theme.mode = "system"
pub const COLORFGBG: &str = "COLORFGBG";

// Overrides the platform config directory
pub const FOLIO_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

use serde::Deserialize;

/// Key bindings. Every key is optional in the configuration file.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,
    key_search: Option<char>,
    key_settings: Option<char>,
    key_toggle_theme: Option<char>,

    // List keys
    key_show_more: Option<char>,
    key_down: Option<char>,
    key_up: Option<char>,
}

impl KeyBindingsConfig {
    // Global keys
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn search(&self) -> char {
        self.key_search.unwrap_or('/')
    }

    pub fn settings(&self) -> char {
        self.key_settings.unwrap_or('s')
    }

    pub fn toggle_theme(&self) -> char {
        self.key_toggle_theme.unwrap_or('t')
    }

    // List keys
    pub fn show_more(&self) -> char {
        self.key_show_more.unwrap_or('m')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }

    /// Bindings that must not collide, with their config names.
    pub fn named_bindings(&self) -> [(&'static str, char); 7] {
        [
            ("key_quit", self.quit()),
            ("key_search", self.search()),
            ("key_settings", self.settings()),
            ("key_toggle_theme", self.toggle_theme()),
            ("key_show_more", self.show_more()),
            ("key_down", self.down()),
            ("key_up", self.up()),
        ]
    }
}

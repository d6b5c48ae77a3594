use tuirealm::props::Alignment;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::Frame;

use crate::components::common::ComponentId;
use crate::config::keys::KeyBindingsConfig;
use crate::theme::ThemeManager;

/// Bottom bar listing the shortcuts of the focused component.
pub struct HelpBar;

impl HelpBar {
    fn global_shortcuts(keys: &KeyBindingsConfig) -> Vec<(String, &'static str)> {
        vec![
            (format!("[{}]", keys.search()), "Search"),
            (format!("[{}]", keys.settings()), "Settings"),
            (format!("[{}]", keys.toggle_theme()), "Theme"),
            (format!("[{}]", keys.quit()), "Quit"),
        ]
    }

    /// Shortcuts for `active`, followed by the global ones where they apply.
    pub fn shortcuts(active: &ComponentId, keys: &KeyBindingsConfig) -> Vec<(String, &'static str)> {
        let mut shortcuts = match active {
            ComponentId::BookList => vec![
                (format!("[↑/{}]", keys.up()), "Up"),
                (format!("[↓/{}]", keys.down()), "Down"),
                ("[Enter]".to_string(), "Details"),
                (format!("[{}]", keys.show_more()), "Show more"),
            ],
            ComponentId::SearchPopup => {
                return vec![
                    ("[Tab]".to_string(), "Next field"),
                    ("[←/→]".to_string(), "Choose"),
                    ("[Enter]".to_string(), "Search"),
                    ("[Esc]".to_string(), "Cancel"),
                ];
            }
            ComponentId::SettingsPopup => {
                return vec![
                    ("[←/→]".to_string(), "Choose"),
                    ("[Enter]".to_string(), "Save"),
                    ("[Esc]".to_string(), "Cancel"),
                ];
            }
            ComponentId::DetailPopup => {
                return vec![("[Esc]".to_string(), "Close")];
            }
            ComponentId::ErrorPopup | ComponentId::WarningPopup => {
                return vec![("[Enter/Esc]".to_string(), "Close")];
            }
            _ => Vec::new(),
        };
        shortcuts.extend(Self::global_shortcuts(keys));
        shortcuts
    }

    pub fn view_with_active(
        frame: &mut Frame,
        area: Rect,
        active: &ComponentId,
        keys: &KeyBindingsConfig,
    ) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, description)) in Self::shortcuts(active, keys).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " | ",
                    Style::default().fg(ThemeManager::text_muted()),
                ));
            }
            spans.push(Span::styled(
                key,
                Style::default().fg(ThemeManager::shortcut_key()),
            ));
            spans.push(Span::styled(
                format!(" {description}"),
                Style::default().fg(ThemeManager::shortcut_description()),
            ));
        }

        let paragraph = Paragraph::new(Text::from(Line::from(spans)))
            .style(Style::default().bg(ThemeManager::surface()))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

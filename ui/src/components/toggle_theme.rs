use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::reactive::{AttributeMap, ReactiveComponent};
use crate::theme::ThemeManager;
use catalog::Mode;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{Event, Frame, NoUserEvent};

pub const TOGGLE_LABEL: &str = "Toggle Theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonMarkup {
    pub label: String,
    pub key: char,
}

/// Header button that flips between night and day.
///
/// The button only asks for a toggle; the update handler reads the current
/// mode from the theme engine and flips it.
pub struct ToggleTheme {
    key: char,
}

impl ToggleTheme {
    pub fn new(key: char) -> Self {
        Self { key }
    }

    pub fn key(&self) -> char {
        self.key
    }
}

impl ReactiveComponent for ToggleTheme {
    type Props = ();
    type Output = ButtonMarkup;

    const TAG: &'static str = "ToggleTheme";

    fn props(&self, _attributes: &AttributeMap) {}

    fn render(&self, _props: &()) -> ButtonMarkup {
        ButtonMarkup {
            label: TOGGLE_LABEL.to_string(),
            key: self.key,
        }
    }

    fn draw(&self, output: &ButtonMarkup, frame: &mut Frame, area: Rect, focused: bool) {
        let icon = match ThemeManager::current_mode() {
            Mode::Night => "☾",
            Mode::Day => "☀",
        };
        let label_style = if focused {
            Style::default()
                .fg(ThemeManager::selection_fg())
                .bg(ThemeManager::selection_bg())
        } else {
            Style::default().fg(ThemeManager::text_primary())
        };
        let line = Line::from(vec![
            Span::styled(
                format!("[{}]", output.key),
                Style::default()
                    .fg(ThemeManager::shortcut_key())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {icon} {}", output.label), label_style),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }

    fn on_event(&self, _output: &ButtonMarkup, ev: &Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if *c == self.key => Some(Msg::ThemeActivity(ThemeActivityMsg::Toggle)),
            // Only reaches the button while it holds focus
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => Some(Msg::ThemeActivity(ThemeActivityMsg::Toggle)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reactive::ReactiveHost;
    use crate::components::state::ComponentState;
    use claims::{assert_none, assert_ok, assert_some_eq};
    use tuirealm::Component;

    fn key(c: char) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code: Key::Char(c),
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn renders_once_as_a_button() {
        let mut host = ReactiveHost::new(ToggleTheme::new('t'));
        assert_ok!(host.mount());
        assert_eq!(host.output().expect("rendered").label, "Toggle Theme");
        assert_eq!(host.render_count(), 1);
    }

    #[test]
    fn bound_key_requests_a_toggle() {
        let mut host = ReactiveHost::new(ToggleTheme::new('t'));
        assert_ok!(host.mount());
        assert_some_eq!(host.on(key('t')), Msg::ThemeActivity(ThemeActivityMsg::Toggle));
        assert_none!(host.on(key('x')));
    }

    #[test]
    fn unmounted_button_ignores_events() {
        let mut host = ReactiveHost::new(ToggleTheme::new('t'));
        assert_none!(host.on(key('t')));
    }
}

use crate::components::base_popup::PopupBuilder;
use crate::components::common::{Msg, OverlayActivityMsg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use catalog::Mode;
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, Props, State,
    StateValue,
};

/// Theme settings form with a single night/day choice.
pub struct SettingsPopup {
    selected: Mode,
    props: Props,
    is_mounted: bool,
}

impl SettingsPopup {
    /// `current` is the engine's settings value, which the form preselects.
    pub fn new(current: Mode) -> Self {
        Self {
            selected: current,
            props: Props::default(),
            is_mounted: false,
        }
    }

    pub fn selected(&self) -> Mode {
        self.selected
    }

    fn option_spans(&self) -> Vec<Span<'static>> {
        Mode::ALL
            .iter()
            .flat_map(|mode| {
                let style = if *mode == self.selected {
                    Style::default()
                        .fg(ThemeManager::selection_fg())
                        .bg(ThemeManager::selection_bg())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(ThemeManager::text_muted())
                };
                [Span::styled(format!(" {mode} "), style), Span::raw("   ")]
            })
            .collect()
    }
}

impl MockComponent for SettingsPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        PopupBuilder::new("⚙ Settings")
            .add_text("Theme")
            .add_empty_line()
            .add_lines([Line::from(self.option_spans())])
            .with_instructions("[←/→] Choose  [Enter] Save  [Esc] Cancel")
            .render(frame, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.selected.to_string()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(Direction::Left) | Cmd::Move(Direction::Right) | Cmd::Toggle => {
                self.selected = self.selected.opposite();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for SettingsPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd = match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                return Some(Msg::OverlayActivity(OverlayActivityMsg::CloseSettings));
            }
            Event::Keyboard(KeyEvent { code: Key::Enter, .. }) => {
                return Some(Msg::ThemeActivity(ThemeActivityMsg::SettingsSubmitted(
                    self.selected,
                )));
            }
            Event::Keyboard(KeyEvent { code: Key::Left, .. }) => Cmd::Move(Direction::Left),
            Event::Keyboard(KeyEvent { code: Key::Right, .. }) => Cmd::Move(Direction::Right),
            Event::Keyboard(KeyEvent {
                code: Key::Tab | Key::Char(' '),
                ..
            }) => Cmd::Toggle,
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for SettingsPopup {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("SettingsPopup is already mounted");
            return Ok(());
        }
        self.is_mounted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_some_eq;
    use tuirealm::event::KeyModifiers;

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn submits_the_preselected_value_unchanged() {
        let mut popup = SettingsPopup::new(Mode::Day);
        assert_some_eq!(
            popup.on(key(Key::Enter)),
            Msg::ThemeActivity(ThemeActivityMsg::SettingsSubmitted(Mode::Day))
        );
    }

    #[test]
    fn arrows_switch_the_choice() {
        let mut popup = SettingsPopup::new(Mode::Night);
        popup.on(key(Key::Right));
        assert_eq!(popup.selected(), Mode::Day);
        assert_some_eq!(
            popup.on(key(Key::Esc)),
            Msg::OverlayActivity(OverlayActivityMsg::CloseSettings)
        );
    }
}

use crate::components::base_popup::PopupBuilder;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::Rect;
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, Props, State};

/// Non-fatal notice, such as a selection that no longer resolves.
pub struct WarningPopup {
    message: String,
    props: Props,
    is_mounted: bool,
}

impl WarningPopup {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            props: Props::default(),
            is_mounted: false,
        }
    }
}

impl MockComponent for WarningPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        PopupBuilder::warning("⚠ Warning")
            .add_multiline_text(self.message.clone())
            .with_instructions("[Enter/Esc] Dismiss")
            .render(frame, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for WarningPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseWarning)),
            _ => None,
        }
    }
}

impl ComponentState for WarningPopup {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("WarningPopup is already mounted");
            return Ok(());
        }
        self.is_mounted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};
    use tuirealm::event::KeyModifiers;

    #[test]
    fn escape_dismisses() {
        let mut popup = WarningPopup::new("gone");
        assert_some_eq!(
            popup.on(Event::Keyboard(KeyEvent::new(Key::Esc, KeyModifiers::NONE))),
            Msg::PopupActivity(PopupActivityMsg::CloseWarning)
        );
        assert_none!(popup.on(Event::Keyboard(KeyEvent::new(
            Key::Char('x'),
            KeyModifiers::NONE
        ))));
    }
}

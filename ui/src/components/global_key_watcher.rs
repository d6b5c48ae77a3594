use crate::components::common::{Msg, OverlayActivityMsg};
use crate::config::keys::KeyBindingsConfig;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Application-wide shortcuts. Character keys are suppressed while a text
/// input has the keyboard, so typing `q` into the title field does not quit.
#[derive(MockComponent)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    keys: KeyBindingsConfig,
    input_captured: bool,
}

impl GlobalKeyWatcher {
    pub fn new(keys: KeyBindingsConfig, input_captured: bool) -> Self {
        Self {
            component: Phantom::default(),
            keys,
            input_captured,
        }
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if !self.input_captured => {
                if c == self.keys.quit() {
                    Some(Msg::AppClose)
                } else if c == self.keys.search() {
                    Some(Msg::OverlayActivity(OverlayActivityMsg::OpenSearch))
                } else if c == self.keys.settings() {
                    Some(Msg::OverlayActivity(OverlayActivityMsg::OpenSettings))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

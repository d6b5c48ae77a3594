use crate::components::base_popup::PopupBuilder;
use crate::components::book_preview::PreviewMarkup;
use crate::components::common::{CatalogActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::config::keys::KeyBindingsConfig;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{List, ListItem, ListState, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, Props, State,
    StateValue,
};

/// Text shown above the list when a search matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// The "show more" control as last computed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowMoreControl {
    pub remaining: usize,
    pub enabled: bool,
}

impl ShowMoreControl {
    pub fn from_remaining(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }

    pub fn label(&self) -> String {
        format!("show more ({})", self.remaining)
    }
}

/// Everything the list draws, copied out of the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookListSnapshot {
    pub rows: Vec<PreviewMarkup>,
    pub show_more: ShowMoreControl,
    pub message_visible: bool,
    pub total_matches: usize,
}

#[derive(Debug, Clone, Copy)]
struct ListKeys {
    show_more: char,
    up: char,
    down: char,
}

/// List container with one delegated selection handler for all rows.
///
/// Rows carry their preview id; on Enter the handler reads the id of the row
/// under the cursor and emits it. The row after the last preview is the
/// "show more" control.
pub struct BookList {
    snapshot: BookListSnapshot,
    cursor: usize,
    keys: ListKeys,
    props: Props,
    is_mounted: bool,
}

impl BookList {
    pub fn new(snapshot: BookListSnapshot, cursor: usize, keys: &KeyBindingsConfig) -> Self {
        let mut list = Self {
            snapshot,
            cursor: 0,
            keys: ListKeys {
                show_more: keys.show_more(),
                up: keys.up(),
                down: keys.down(),
            },
            props: Props::default(),
            is_mounted: false,
        };
        list.cursor = cursor.min(list.last_position());
        list
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the show-more row
    fn last_position(&self) -> usize {
        self.snapshot.rows.len()
    }

    fn on_show_more_row(&self) -> bool {
        self.cursor == self.last_position()
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.last_position() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    fn show_more(&self) -> Option<Msg> {
        if self.snapshot.show_more.enabled {
            Some(Msg::CatalogActivity(CatalogActivityMsg::ShowMore))
        } else {
            log::debug!("Show more ignored: nothing remaining");
            None
        }
    }

    /// Delegated handler: resolves the row under the cursor to its preview id.
    fn select(&self) -> Option<Msg> {
        if self.on_show_more_row() {
            return self.show_more();
        }
        self.snapshot
            .rows
            .get(self.cursor)
            .map(|row| Msg::CatalogActivity(CatalogActivityMsg::PreviewSelected(row.preview_id.clone())))
    }

    fn items(&self) -> Vec<ListItem<'static>> {
        let mut items: Vec<ListItem<'static>> = self
            .snapshot
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| ListItem::new(row.lines(i == self.cursor)))
            .collect();

        let control = self.snapshot.show_more;
        let mut style = if control.enabled {
            Style::default().fg(ThemeManager::primary_accent())
        } else {
            Style::default()
                .fg(ThemeManager::text_muted())
                .add_modifier(Modifier::DIM)
        };
        if self.on_show_more_row() {
            style = style.bg(ThemeManager::selection_bg()).add_modifier(Modifier::BOLD);
        }
        items.push(ListItem::new(Line::from(Span::styled(control.label(), style))));
        items
    }
}

impl MockComponent for BookList {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();
        let title = format!(
            " Books ({}/{}) ",
            self.snapshot.rows.len(),
            self.snapshot.total_matches
        );
        let block = PopupBuilder::new("Books").create_conditional_block(
            title,
            focused,
            ThemeManager::primary_accent(),
            ThemeManager::text_muted(),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let list_area = if self.snapshot.message_visible {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(1)])
                .split(inner);
            frame.render_widget(
                Paragraph::new(Line::styled(
                    NO_RESULTS_MESSAGE,
                    Style::default()
                        .fg(ThemeManager::status_warning())
                        .add_modifier(Modifier::BOLD),
                )),
                chunks[0],
            );
            chunks[1]
        } else {
            inner
        };

        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(List::new(self.items()), list_area, &mut state);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.cursor))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(tuirealm::command::Direction::Down) => self.move_cursor(1),
            Cmd::Move(tuirealm::command::Direction::Up) => self.move_cursor(-1),
            Cmd::GoTo(tuirealm::command::Position::Begin) => self.cursor = 0,
            Cmd::GoTo(tuirealm::command::Position::End) => self.cursor = self.last_position(),
            Cmd::Scroll(tuirealm::command::Direction::Down) => self.move_cursor(10),
            Cmd::Scroll(tuirealm::command::Direction::Up) => self.move_cursor(-10),
            _ => return CmdResult::None,
        }
        CmdResult::Changed(self.state())
    }
}

impl Component<Msg, NoUserEvent> for BookList {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd = match ev {
            Event::Keyboard(KeyEvent { code: Key::Enter, .. }) => return self.select(),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.keys.show_more => return self.show_more(),
            Event::Keyboard(KeyEvent { code: Key::Down, .. }) => {
                Cmd::Move(tuirealm::command::Direction::Down)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.keys.down => Cmd::Move(tuirealm::command::Direction::Down),
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                Cmd::Move(tuirealm::command::Direction::Up)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.keys.up => Cmd::Move(tuirealm::command::Direction::Up),
            Event::Keyboard(KeyEvent { code: Key::PageDown, .. }) => {
                Cmd::Scroll(tuirealm::command::Direction::Down)
            }
            Event::Keyboard(KeyEvent { code: Key::PageUp, .. }) => {
                Cmd::Scroll(tuirealm::command::Direction::Up)
            }
            Event::Keyboard(KeyEvent { code: Key::Home, .. }) => {
                Cmd::GoTo(tuirealm::command::Position::Begin)
            }
            Event::Keyboard(KeyEvent { code: Key::End, .. }) => {
                Cmd::GoTo(tuirealm::command::Position::End)
            }
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for BookList {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("BookList is already mounted");
            return Ok(());
        }
        self.is_mounted = true;
        log::debug!(
            "BookList mounted with {} rows, cursor at {}",
            self.snapshot.rows.len(),
            self.cursor
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    fn row(id: &str) -> PreviewMarkup {
        PreviewMarkup {
            preview_id: id.to_string(),
            title: format!("Title {id}"),
            image: String::new(),
            byline: "By Someone".to_string(),
        }
    }

    fn list(ids: &[&str], remaining: usize, cursor: usize) -> BookList {
        let snapshot = BookListSnapshot {
            rows: ids.iter().map(|id| row(id)).collect(),
            show_more: ShowMoreControl::from_remaining(remaining),
            message_visible: ids.is_empty(),
            total_matches: ids.len() + remaining,
        };
        BookList::new(snapshot, cursor, &KeyBindingsConfig::default())
    }

    fn press(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn enter_emits_the_preview_id_under_the_cursor() {
        let mut list = list(&["b1", "b2", "b3"], 0, 0);
        list.on(press(Key::Down));
        assert_some_eq!(
            list.on(press(Key::Enter)),
            Msg::CatalogActivity(CatalogActivityMsg::PreviewSelected("b2".into()))
        );
    }

    #[test]
    fn show_more_row_follows_the_last_preview() {
        let mut list = list(&["b1"], 4, 0);
        list.on(press(Key::End));
        assert_eq!(list.cursor(), 1);
        assert_some_eq!(
            list.on(press(Key::Enter)),
            Msg::CatalogActivity(CatalogActivityMsg::ShowMore)
        );
    }

    #[test]
    fn disabled_show_more_is_ignored() {
        let mut list = list(&["b1"], 0, 1);
        assert_none!(list.on(press(Key::Enter)));
        assert_none!(list.on(press(Key::Char('m'))));
    }

    #[test]
    fn cursor_is_clamped_on_remount() {
        let list = list(&["b1", "b2"], 0, 99);
        assert_eq!(list.cursor(), 2);
        assert_eq!(list.state(), State::One(StateValue::Usize(2)));
    }

    #[test]
    fn control_label_reports_remaining() {
        assert_eq!(ShowMoreControl::from_remaining(6).label(), "show more (6)");
        assert!(!ShowMoreControl::from_remaining(0).enabled);
    }
}

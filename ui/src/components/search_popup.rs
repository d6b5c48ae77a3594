use crate::components::base_popup::PopupBuilder;
use crate::components::common::{CatalogActivityMsg, Msg, OverlayActivityMsg};
use crate::components::search_filter::SelectMarkup;
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use catalog::FilterCriteria;
use catalog::filter::ANY;
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, Props, State,
    StateValue,
};

const MAX_TITLE_LEN: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Genre,
    Author,
}

impl SearchField {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Author,
            Self::Author => Self::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Genre => Self::Title,
            Self::Author => Self::Genre,
        }
    }
}

/// One dropdown inside the search form
#[derive(Debug, Clone)]
struct Dropdown {
    markup: SelectMarkup,
    selected: usize,
}

impl Dropdown {
    fn new(markup: SelectMarkup, value: &str) -> Self {
        let selected = markup.position_of(value).unwrap_or(0);
        Self { markup, selected }
    }

    fn value(&self) -> String {
        self.markup
            .entries
            .get(self.selected)
            .map(|entry| entry.value.clone())
            .unwrap_or_else(|| ANY.to_string())
    }

    fn label(&self) -> &str {
        self.markup
            .entries
            .get(self.selected)
            .map(|entry| entry.label.as_str())
            .unwrap_or("")
    }

    fn step(&mut self, forward: bool) {
        let len = self.markup.len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }
}

/// Search overlay: a free-text title field and two dropdowns.
///
/// Submission sends the raw form values; normalization into criteria happens
/// in the update handler.
pub struct SearchPopup {
    title: String,
    genre: Dropdown,
    author: Dropdown,
    focus: SearchField,
    props: Props,
    is_mounted: bool,
}

impl SearchPopup {
    /// Builds the form preselected with `current`.
    pub fn new(genres: SelectMarkup, authors: SelectMarkup, current: &FilterCriteria) -> Self {
        Self {
            title: current.title.clone(),
            genre: Dropdown::new(genres, current.genre.as_str()),
            author: Dropdown::new(authors, current.author.as_str()),
            focus: SearchField::Title,
            props: Props::default(),
            is_mounted: false,
        }
    }

    pub fn focus(&self) -> SearchField {
        self.focus
    }

    fn submission(&self) -> Msg {
        Msg::CatalogActivity(CatalogActivityMsg::SearchSubmitted {
            genre: self.genre.value(),
            title: self.title.clone(),
            author: self.author.value(),
        })
    }

    fn field_line(&self, field: SearchField, label: &str, value: String) -> Line<'static> {
        let focused = self.focus == field;
        let marker = if focused { "▶ " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(ThemeManager::selection_fg())
                .bg(ThemeManager::selection_bg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ThemeManager::text_primary())
        };
        Line::from(vec![
            Span::styled(
                format!("{marker}{label:<8}"),
                Style::default().fg(ThemeManager::header_accent()),
            ),
            Span::styled(value, value_style),
        ])
    }
}

impl MockComponent for SearchPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let title_value = if self.title.is_empty() && self.focus != SearchField::Title {
            "any title".to_string()
        } else if self.focus == SearchField::Title {
            format!("{}▏", self.title)
        } else {
            self.title.clone()
        };
        let lines = vec![
            self.field_line(SearchField::Title, "Title", title_value),
            Line::from(""),
            self.field_line(SearchField::Genre, "Genre", format!("< {} >", self.genre.label())),
            Line::from(""),
            self.field_line(SearchField::Author, "Author", format!("< {} >", self.author.label())),
        ];

        PopupBuilder::new("🔍 Search")
            .align_left()
            .add_lines(lines)
            .with_instructions("[Tab] Next field  [←/→] Choose  [Enter] Search  [Esc] Cancel")
            .render(frame, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::Vec(vec![
            StateValue::String(self.genre.value()),
            StateValue::String(self.title.clone()),
            StateValue::String(self.author.value()),
        ])
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Change => self.focus = self.focus.next(),
            Cmd::Move(Direction::Right) | Cmd::Move(Direction::Left) => {
                let forward = matches!(cmd, Cmd::Move(Direction::Right));
                match self.focus {
                    SearchField::Title => return CmdResult::None,
                    SearchField::Genre => self.genre.step(forward),
                    SearchField::Author => self.author.step(forward),
                }
            }
            Cmd::Type(c) => {
                if self.focus != SearchField::Title || self.title.chars().count() >= MAX_TITLE_LEN {
                    return CmdResult::None;
                }
                self.title.push(c);
            }
            Cmd::Delete => {
                if self.focus != SearchField::Title || self.title.pop().is_none() {
                    return CmdResult::None;
                }
            }
            _ => return CmdResult::None,
        }
        CmdResult::Changed(self.state())
    }
}

impl Component<Msg, NoUserEvent> for SearchPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd = match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                return Some(Msg::OverlayActivity(OverlayActivityMsg::CloseSearch));
            }
            Event::Keyboard(KeyEvent { code: Key::Enter, .. }) => return Some(self.submission()),
            Event::Keyboard(KeyEvent {
                code: Key::Tab | Key::Down,
                ..
            }) => Cmd::Change,
            Event::Keyboard(KeyEvent {
                code: Key::BackTab | Key::Up,
                ..
            }) => {
                self.focus = self.focus.previous();
                return Some(Msg::ForceRedraw);
            }
            Event::Keyboard(KeyEvent { code: Key::Right, .. }) => Cmd::Move(Direction::Right),
            Event::Keyboard(KeyEvent { code: Key::Left, .. }) => Cmd::Move(Direction::Left),
            Event::Keyboard(KeyEvent { code: Key::Backspace, .. }) => Cmd::Delete,
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            }) => Cmd::Type(c),
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for SearchPopup {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("SearchPopup is already mounted");
            return Ok(());
        }
        self.is_mounted = true;
        log::debug!("SearchPopup mounted with focus on {:?}", self.focus);
        Ok(())
    }
}

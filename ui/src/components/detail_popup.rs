use crate::components::base_popup::PopupBuilder;
use crate::components::common::{Msg, OverlayActivityMsg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use catalog::{Book, Catalog, LookupError, UNKNOWN_LABEL};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, Props, State};

/// Fields shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub image: String,
    pub title: String,
    /// `"{author name} ({year})"`
    pub subtitle: String,
    pub description: String,
}

impl BookDetail {
    /// Resolves `book`'s author against `catalog`. An unresolvable author is
    /// shown as the unknown label rather than failing the whole detail.
    pub fn from_book(catalog: &Catalog, book: &Book) -> Self {
        let author = match catalog.author_name(&book.author) {
            Ok(name) => name,
            Err(e) => {
                log::warn!("Book '{}': {e}", book.id);
                UNKNOWN_LABEL
            }
        };
        Self {
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{author} ({})", book.published_year()),
            description: book.description.clone(),
        }
    }

    /// Looks up `id` in the full catalog, not just the current matches.
    pub fn lookup(catalog: &Catalog, id: &str) -> Result<Self, LookupError> {
        let book = catalog.book(id)?;
        Ok(Self::from_book(catalog, book))
    }
}

pub struct DetailPopup {
    detail: BookDetail,
    props: Props,
    is_mounted: bool,
}

impl DetailPopup {
    pub fn new(detail: BookDetail) -> Self {
        Self {
            detail,
            props: Props::default(),
            is_mounted: false,
        }
    }
}

impl MockComponent for DetailPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let detail = &self.detail;
        PopupBuilder::new("📖 Details")
            .align_left()
            .add_line(vec![Span::styled(
                detail.title.clone(),
                Style::default()
                    .fg(ThemeManager::title_accent())
                    .add_modifier(Modifier::BOLD),
            )])
            .add_line(vec![Span::styled(
                detail.subtitle.clone(),
                Style::default().fg(ThemeManager::header_accent()),
            )])
            .add_lines([Line::from(Span::styled(
                detail.image.clone(),
                Style::default()
                    .fg(ThemeManager::text_muted())
                    .add_modifier(Modifier::UNDERLINED),
            ))])
            .add_empty_line()
            .add_multiline_text(detail.description.clone())
            .with_instructions("[Esc] Close")
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

impl Component<Msg, NoUserEvent> for DetailPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Esc, ..
            }) => Some(Msg::OverlayActivity(OverlayActivityMsg::CloseDetail)),
            _ => None,
        }
    }
}

impl ComponentState for DetailPopup {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("DetailPopup is already mounted");
            return Ok(());
        }
        self.is_mounted = true;
        log::debug!("DetailPopup mounted for '{}'", self.detail.title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Dataset;
    use claims::{assert_err_eq, assert_ok};
    use tuirealm::event::KeyModifiers;

    #[test]
    fn subtitle_joins_author_and_year() {
        let catalog = assert_ok!(Catalog::new(assert_ok!(Dataset::bundled())));
        let book = catalog.books()[0].clone();
        let detail = assert_ok!(BookDetail::lookup(&catalog, &book.id));
        let author = assert_ok!(catalog.author_name(&book.author));
        assert_eq!(
            detail.subtitle,
            format!("{author} ({})", book.published_year())
        );
        assert_eq!(detail.description, book.description);
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn only_esc_closes() {
        let catalog = assert_ok!(Catalog::new(assert_ok!(Dataset::bundled())));
        let detail = BookDetail::from_book(&catalog, &catalog.books()[0]);
        let mut popup = DetailPopup::new(detail);
        assert_eq!(
            popup.on(key(Key::Esc)),
            Some(Msg::OverlayActivity(OverlayActivityMsg::CloseDetail))
        );
        assert_eq!(popup.on(key(Key::Enter)), None);
        assert_eq!(popup.on(key(Key::Char('q'))), None);
    }

    #[test]
    fn unknown_id_is_a_lookup_error() {
        let catalog = assert_ok!(Catalog::new(assert_ok!(Dataset::bundled())));
        assert_err_eq!(
            BookDetail::lookup(&catalog, "missing"),
            LookupError::UnknownBook("missing".into())
        );
    }
}

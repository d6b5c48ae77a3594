use crate::components::reactive::{AttributeMap, ReactiveComponent};
use crate::theme::ThemeManager;
use catalog::{Book, Catalog, LookupError, UNKNOWN_LABEL};
use std::sync::Arc;
use tuirealm::Frame;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;

pub const ATTR_AUTHOR: &str = "author";
pub const ATTR_ID: &str = "id";
pub const ATTR_IMAGE: &str = "image";
pub const ATTR_TITLE: &str = "title";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewProps {
    pub id: String,
    pub title: String,
    pub image: String,
    pub author_name: String,
}

/// Rendered preview row.
///
/// `preview_id` is the row's data attribute; the list's delegated selection
/// handler reads it back to find the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMarkup {
    pub preview_id: String,
    pub title: String,
    pub image: String,
    pub byline: String,
}

impl PreviewMarkup {
    /// Two display lines: title, then byline and cover URL.
    pub fn lines(&self, selected: bool) -> Vec<Line<'static>> {
        let title_style = if selected {
            Style::default()
                .fg(ThemeManager::selection_fg())
                .bg(ThemeManager::selection_bg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(ThemeManager::text_primary())
                .add_modifier(Modifier::BOLD)
        };
        vec![
            Line::from(Span::styled(self.title.clone(), title_style)),
            Line::from(vec![
                Span::styled(
                    format!("  {}", self.byline),
                    Style::default().fg(ThemeManager::text_muted()),
                ),
                Span::styled(
                    format!("  {}", self.image),
                    Style::default()
                        .fg(ThemeManager::text_muted())
                        .add_modifier(Modifier::DIM),
                ),
            ]),
        ]
    }
}

/// Clickable preview of one book, bound to `author`, `id`, `image` and `title`.
pub struct BookPreview {
    catalog: Arc<Catalog>,
}

impl BookPreview {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Attribute values that bind a preview to `book`.
    pub fn attributes_for(book: &Book) -> [(&'static str, String); 4] {
        [
            (ATTR_AUTHOR, book.author.clone()),
            (ATTR_ID, book.id.clone()),
            (ATTR_IMAGE, book.image.clone()),
            (ATTR_TITLE, book.title.clone()),
        ]
    }

    pub fn resolve_author(&self, author_id: &str) -> Result<&str, LookupError> {
        self.catalog.author_name(author_id)
    }
}

impl ReactiveComponent for BookPreview {
    type Props = PreviewProps;
    type Output = PreviewMarkup;

    const TAG: &'static str = "BookPreview";
    const WATCHED: &'static [&'static str] = &[ATTR_AUTHOR, ATTR_ID, ATTR_IMAGE, ATTR_TITLE];

    fn props(&self, attributes: &AttributeMap) -> PreviewProps {
        let get = |name: &str| attributes.get(name).cloned().unwrap_or_default();
        let author_id = get(ATTR_AUTHOR);
        let author_name = match self.resolve_author(&author_id) {
            Ok(name) => name.to_string(),
            Err(e) => {
                log::warn!("{}: {e}, showing '{UNKNOWN_LABEL}'", Self::TAG);
                UNKNOWN_LABEL.to_string()
            }
        };

        PreviewProps {
            id: get(ATTR_ID),
            title: get(ATTR_TITLE),
            image: get(ATTR_IMAGE),
            author_name,
        }
    }

    fn render(&self, props: &PreviewProps) -> PreviewMarkup {
        PreviewMarkup {
            preview_id: props.id.clone(),
            title: props.title.clone(),
            image: props.image.clone(),
            byline: format!("By {}", props.author_name),
        }
    }

    fn draw(&self, output: &PreviewMarkup, frame: &mut Frame, area: Rect, focused: bool) {
        frame.render_widget(Paragraph::new(output.lines(focused)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reactive::ReactiveHost;
    use crate::components::state::ComponentState;
    use catalog::Dataset;
    use claims::assert_ok;

    fn catalog() -> Arc<Catalog> {
        Arc::new(assert_ok!(Catalog::new(assert_ok!(Dataset::bundled()))))
    }

    fn mounted_preview(catalog: &Arc<Catalog>, book: &Book) -> ReactiveHost<BookPreview> {
        let mut host = ReactiveHost::new(BookPreview::new(catalog.clone()));
        for (name, value) in BookPreview::attributes_for(book) {
            host.set_attribute(name, value);
        }
        assert_ok!(host.mount());
        host
    }

    #[test]
    fn renders_author_display_name() {
        let catalog = catalog();
        let book = catalog.books()[0].clone();
        let host = mounted_preview(&catalog, &book);
        let output = host.output().expect("rendered");
        assert_eq!(output.preview_id, book.id);
        assert_eq!(output.title, book.title);
        assert_eq!(
            output.byline,
            format!("By {}", assert_ok!(catalog.author_name(&book.author)))
        );
    }

    #[test]
    fn unknown_author_falls_back_to_label() {
        let catalog = catalog();
        let book = catalog.books()[0].clone();
        let mut host = mounted_preview(&catalog, &book);
        assert!(host.set_attribute(ATTR_AUTHOR, "nobody"));
        assert_eq!(host.output().expect("rendered").byline, "By Unknown");
    }

    #[test]
    fn every_watched_attribute_rerenders() {
        let catalog = catalog();
        let book = catalog.books()[0].clone();
        let mut host = mounted_preview(&catalog, &book);
        for &name in BookPreview::WATCHED {
            let value = host.attribute(name).unwrap_or_default().to_string();
            assert!(host.set_attribute(name, value));
        }
        assert_eq!(host.render_count(), 1 + BookPreview::WATCHED.len());
    }
}

use crate::components::reactive::{AttributeMap, ReactiveComponent};
use crate::theme::ThemeManager;
use catalog::LabelMap;
use catalog::filter::ANY;
use tuirealm::Frame;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::Line;
use tuirealm::ratatui::widgets::Paragraph;

pub const ATTR_OPTIONS: &str = "options";
pub const ATTR_DEFAULT_OPTION: &str = "default-option";

/// Placeholder label used when `default-option` is missing or blank.
pub const FALLBACK_DEFAULT_LABEL: &str = "select an option";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterProps {
    pub options: LabelMap,
    pub default_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEntry {
    /// Submitted value: a registry id or `"any"`
    pub value: String,
    pub label: String,
}

/// Rendered dropdown. The first entry is always the `"any"` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectMarkup {
    pub entries: Vec<SelectEntry>,
}

impl SelectMarkup {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.value == value)
    }
}

/// Dropdown populated from a JSON `options` attribute. Renders on mount only.
#[derive(Debug, Default)]
pub struct SearchFilter;

impl SearchFilter {
    /// Decodes the `options` attribute, keeping document order.
    pub fn parse_options(raw: &str) -> Result<LabelMap, serde_json::Error> {
        LabelMap::from_json(raw)
    }
}

impl ReactiveComponent for SearchFilter {
    type Props = FilterProps;
    type Output = SelectMarkup;

    const TAG: &'static str = "SearchFilter";

    fn props(&self, attributes: &AttributeMap) -> FilterProps {
        let options = match attributes.get(ATTR_OPTIONS) {
            Some(raw) => Self::parse_options(raw).unwrap_or_else(|e| {
                log::error!("{}: invalid options JSON, rendering no options: {e}", Self::TAG);
                LabelMap::new()
            }),
            None => LabelMap::new(),
        };
        let default_label = attributes
            .get(ATTR_DEFAULT_OPTION)
            .filter(|label| !label.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| FALLBACK_DEFAULT_LABEL.to_string());

        FilterProps {
            options,
            default_label,
        }
    }

    fn render(&self, props: &FilterProps) -> SelectMarkup {
        let mut entries = Vec::with_capacity(props.options.len() + 1);
        entries.push(SelectEntry {
            value: ANY.to_string(),
            label: props.default_label.clone(),
        });
        entries.extend(props.options.iter().map(|(id, label)| SelectEntry {
            value: id.to_string(),
            label: label.to_string(),
        }));
        SelectMarkup { entries }
    }

    fn draw(&self, output: &SelectMarkup, frame: &mut Frame, area: Rect, focused: bool) {
        let label = output
            .entries
            .first()
            .map(|entry| entry.label.as_str())
            .unwrap_or(FALLBACK_DEFAULT_LABEL);
        let style = if focused {
            Style::default()
                .fg(ThemeManager::primary_accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ThemeManager::text_primary())
        };
        frame.render_widget(
            Paragraph::new(Line::styled(format!("< {label} >"), style)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reactive::ReactiveHost;
    use crate::components::state::ComponentState;
    use claims::{assert_err, assert_ok};

    fn mounted(options: Option<&str>, default: Option<&str>) -> ReactiveHost<SearchFilter> {
        let mut host = ReactiveHost::new(SearchFilter);
        if let Some(options) = options {
            host.set_attribute(ATTR_OPTIONS, options);
        }
        if let Some(default) = default {
            host.set_attribute(ATTR_DEFAULT_OPTION, default);
        }
        assert_ok!(host.mount());
        host
    }

    #[test]
    fn options_follow_placeholder_in_document_order() {
        let host = mounted(Some(r#"{"b": "Bee", "a": "Ay"}"#), Some("All Genres"));
        let values: Vec<&str> = host
            .output()
            .expect("rendered")
            .entries
            .iter()
            .map(|entry| entry.value.as_str())
            .collect();
        assert_eq!(values, vec!["any", "b", "a"]);
        assert_eq!(host.output().expect("rendered").entries[0].label, "All Genres");
    }

    #[test]
    fn invalid_json_renders_only_the_placeholder() {
        assert_err!(SearchFilter::parse_options("{oops"));
        let host = mounted(Some("{oops"), Some("All Authors"));
        let output = host.output().expect("rendered");
        assert_eq!(output.len(), 1);
        assert_eq!(output.entries[0].value, "any");
        assert_eq!(output.entries[0].label, "All Authors");
    }

    #[test]
    fn missing_default_label_uses_fallback() {
        let host = mounted(Some("{}"), None);
        assert_eq!(
            host.output().expect("rendered").entries[0].label,
            FALLBACK_DEFAULT_LABEL
        );
    }

    #[test]
    fn attribute_writes_after_mount_do_not_rerender() {
        let mut host = mounted(Some(r#"{"a": "A"}"#), None);
        assert!(!host.set_attribute(ATTR_OPTIONS, r#"{"x": "X", "y": "Y"}"#));
        assert_eq!(host.render_count(), 1);
        assert_eq!(host.output().expect("rendered").len(), 2);
    }
}

use crate::theme::ThemeManager;
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Colors shared by overlays and framed panels
#[derive(Debug, Clone, Copy)]
pub struct PopupStyle {
    pub border_color: Color,
    pub title_color: Color,
    pub text_color: Color,
    pub muted_color: Color,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            border_color: ThemeManager::primary_accent(),
            title_color: ThemeManager::title_accent(),
            text_color: ThemeManager::text_primary(),
            muted_color: ThemeManager::text_muted(),
        }
    }
}

impl PopupStyle {
    pub fn error() -> Self {
        Self {
            border_color: ThemeManager::status_error(),
            title_color: ThemeManager::status_error(),
            ..Self::default()
        }
    }

    pub fn warning() -> Self {
        Self {
            border_color: ThemeManager::status_warning(),
            title_color: ThemeManager::status_warning(),
            ..Self::default()
        }
    }
}

/// Builds a framed, centered overlay from lines of content.
pub struct PopupBuilder {
    title: String,
    style: PopupStyle,
    content_lines: Vec<Line<'static>>,
    instructions: Option<String>,
    alignment: Alignment,
}

impl PopupBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self::styled(title, PopupStyle::default())
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::styled(title, PopupStyle::error())
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::styled(title, PopupStyle::warning())
    }

    fn styled(title: impl Into<String>, style: PopupStyle) -> Self {
        Self {
            title: title.into(),
            style,
            content_lines: Vec::new(),
            instructions: None,
            alignment: Alignment::Center,
        }
    }

    pub fn align_left(mut self) -> Self {
        self.alignment = Alignment::Left;
        self
    }

    pub fn add_text(mut self, text: impl Into<String>) -> Self {
        self.content_lines.push(Line::from(text.into()));
        self
    }

    pub fn add_empty_line(mut self) -> Self {
        self.content_lines.push(Line::from(""));
        self
    }

    pub fn add_line(mut self, spans: Vec<Span<'static>>) -> Self {
        self.content_lines.push(Line::from(spans));
        self
    }

    pub fn add_lines(mut self, lines: impl IntoIterator<Item = Line<'static>>) -> Self {
        self.content_lines.extend(lines);
        self
    }

    /// One line per input line, followed by a blank separator.
    pub fn add_multiline_text(mut self, text: impl Into<String>) -> Self {
        for line in text.into().lines() {
            self.content_lines.push(Line::from(line.to_string()));
        }
        self.content_lines.push(Line::from(""));
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Block in this popup's colors with a border that follows focus.
    pub fn create_conditional_block(
        self,
        title: impl Into<String>,
        is_focused: bool,
        focused_color: Color,
        unfocused_color: Color,
    ) -> Block<'static> {
        let border_color = if is_focused {
            focused_color
        } else {
            unfocused_color
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(title.into())
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.style.title_color)
                    .add_modifier(Modifier::BOLD),
            )
    }

    /// Clears `area` and draws the framed content over it.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.style.border_color))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.style.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(ThemeManager::surface()));

        let mut all_lines = vec![Line::from("")];
        all_lines.extend(self.content_lines);

        if let Some(instructions) = self.instructions {
            all_lines.push(Line::from(""));
            all_lines.push(Line::from(Span::styled(
                instructions,
                Style::default().fg(self.style.muted_color),
            )));
        }

        let paragraph = Paragraph::new(all_lines)
            .block(block)
            .style(Style::default().fg(self.style.text_color))
            .alignment(self.alignment)
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Overlay sizing relative to the full frame
pub struct PopupLayout;

impl PopupLayout {
    /// Centered rectangle covering the given percentages of `area`
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let popup_width = (area.width * width_percent.min(100)) / 100;
        let popup_height = (area.height * height_percent.min(100)) / 100;

        let x = (area.width.saturating_sub(popup_width)) / 2;
        let y = (area.height.saturating_sub(popup_height)) / 2;

        Rect {
            x: area.x + x,
            y: area.y + y,
            width: popup_width,
            height: popup_height,
        }
    }

    pub fn small(area: Rect) -> Rect {
        Self::centered(area, 40, 30)
    }

    pub fn medium(area: Rect) -> Rect {
        Self::centered(area, 60, 50)
    }

    pub fn large(area: Rect) -> Rect {
        Self::centered(area, 80, 70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_area_stays_inside_the_frame() {
        let frame = Rect::new(0, 0, 100, 40);
        let popup = PopupLayout::medium(frame);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));
        assert_eq!(PopupLayout::centered(frame, 150, 100), frame);
    }
}

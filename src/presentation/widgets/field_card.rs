use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct FieldCardStyle {
    pub active_border: Style,
    pub inactive_border: Style,
    pub title: Style,
    pub value: Style,
    pub hint: Style,
}

impl FieldCardStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            active_border: theme.active_style,
            value: theme.value_style,
            hint: theme.dimmed_style,
            ..Self::default()
        }
    }
}

impl Default for FieldCardStyle {
    fn default() -> Self {
        Self {
            active_border: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            inactive_border: Style::default().fg(Color::DarkGray),
            title: Style::default(),
            value: Style::default().add_modifier(Modifier::BOLD),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Card showing one opening measurement, highlighted while it receives
/// keypad input.
pub struct FieldCard<'a> {
    title: &'a str,
    value: &'a str,
    active: bool,
    style: FieldCardStyle,
}

impl<'a> FieldCard<'a> {
    #[must_use]
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            active: false,
            style: FieldCardStyle::default(),
        }
    }

    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FieldCardStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for FieldCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.active {
            self.style.active_border
        } else {
            self.style.inactive_border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.title), self.style.title));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let value_area = Rect::new(inner.x, inner.y, inner.width, 1);
        Paragraph::new(Line::from(Span::styled(self.value, self.style.value)))
            .render(value_area, buf);

        if inner.height > 1 {
            let hint = if self.active { "editing" } else { "Tab to edit" };
            let hint_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            Paragraph::new(Line::from(Span::styled(hint, self.style.hint)))
                .render(hint_area, buf);
        }
    }
}

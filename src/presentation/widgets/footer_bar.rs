use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One key/label pair shown in the footer.
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

/// Keybinding hint bar pinned to the bottom row.
pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self {
            hints,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", hint.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(format!(" {} ", hint.key), self.style.key_style));
        }
        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let line = Line::from(self.build_spans());
        Paragraph::new(line).render(Rect::new(area.x, area.y, area.width, 1), buf);
    }
}

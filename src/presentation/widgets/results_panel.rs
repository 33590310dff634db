use crate::application::dto::SizeSummary;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ResultsPanelStyle {
    pub border: Style,
    pub label: Style,
    pub value: Style,
    pub formula: Style,
}

impl ResultsPanelStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: Style::default().fg(theme.accent),
            value: theme.value_style,
            formula: theme.dimmed_style,
            ..Self::default()
        }
    }
}

impl Default for ResultsPanelStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Cyan),
            label: Style::default(),
            value: Style::default().add_modifier(Modifier::BOLD),
            formula: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Finished-size readout with the per-door pair line when split is enabled.
pub struct ResultsPanel<'a> {
    summary: &'a SizeSummary,
    style: ResultsPanelStyle,
}

impl<'a> ResultsPanel<'a> {
    #[must_use]
    pub fn new(summary: &'a SizeSummary) -> Self {
        Self {
            summary,
            style: ResultsPanelStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: ResultsPanelStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(" Finished size ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(vec![
            Span::styled("Door:  ", self.style.label),
            Span::styled(&self.summary.finished_width, self.style.value),
            Span::styled(" W  x  ", self.style.label),
            Span::styled(&self.summary.finished_height, self.style.value),
            Span::styled(" H", self.style.label),
        ])];

        if let Some(per_door) = &self.summary.per_door {
            lines.push(Line::from(vec![
                Span::styled("Pair:  ", self.style.label),
                Span::styled(&per_door.width, self.style.value),
                Span::styled(" W each, center gap ", self.style.label),
                Span::styled(&per_door.center_gap, self.style.value),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "finished = opening + 2 \u{d7} overlay (per side), to the nearest 1/16\"",
            self.style.formula,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

use crate::domain::sixteenths;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const MIN_VALUE: u8 = 1;
const MAX_VALUE: u8 = 15;
const GRID_COLUMNS: u8 = 5;

/// Result of a picker key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    None,
    /// A value in sixteenths was chosen.
    Apply(u8),
    Cancel,
}

/// Popup grid of fractions from 1/16" to 15/16".
///
/// Shared by measurement entry, the custom overlay value, and the center
/// gap, so all three are limited to the same 1-15 sixteenths range.
pub struct FractionPicker {
    title: String,
    selected: u8,
}

impl FractionPicker {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            selected: MIN_VALUE,
        }
    }

    /// Opens the picker with a value pre-selected.
    #[must_use]
    pub fn with_selected(mut self, value: u8) -> Self {
        self.selected = value.clamp(MIN_VALUE, MAX_VALUE);
        self
    }

    /// Currently highlighted value in sixteenths.
    #[must_use]
    pub const fn selected(&self) -> u8 {
        self.selected
    }

    /// Handles a key event, returning the chosen value on Enter.
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Enter => return PickerAction::Apply(self.selected),
            KeyCode::Esc => return PickerAction::Cancel,
            KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1).max(MIN_VALUE);
            }
            KeyCode::Right => {
                self.selected = (self.selected + 1).min(MAX_VALUE);
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(GRID_COLUMNS).max(MIN_VALUE);
            }
            KeyCode::Down => {
                self.selected = (self.selected + GRID_COLUMNS).min(MAX_VALUE);
            }
            _ => {}
        }
        PickerAction::None
    }

    fn theme_styles(theme: Option<&Theme>) -> (Style, Style) {
        theme.map_or_else(
            || {
                (
                    Style::default().fg(Color::Cyan),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            },
            |t| {
                (
                    t.active_style,
                    Style::default()
                        .fg(Color::Black)
                        .bg(t.accent)
                        .add_modifier(Modifier::BOLD),
                )
            },
        )
    }

    /// Renders the picker as a popup over `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: Option<&Theme>) {
        let (border_style, selected_style) = Self::theme_styles(theme);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for row in 0..3u8 {
            let mut spans = Vec::new();
            for col in 0..GRID_COLUMNS {
                let value = row * GRID_COLUMNS + col + 1;
                if value > MAX_VALUE {
                    break;
                }
                let (n, d) = sixteenths::reduce(value);
                let label = format!(" {n}/{d} ");
                let style = if value == self.selected {
                    selected_style
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!("{label:^8}"), style));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            "arrows: move | Enter: select | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_at_one_sixteenth() {
        let picker = FractionPicker::new("Fraction");
        assert_eq!(picker.selected(), 1);
    }

    #[test]
    fn test_navigation_clamps_to_grid() {
        let mut picker = FractionPicker::new("Fraction");
        picker.handle_key(key(KeyCode::Left));
        assert_eq!(picker.selected(), 1);

        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.selected(), 6);
        picker.handle_key(key(KeyCode::Right));
        assert_eq!(picker.selected(), 7);
        picker.handle_key(key(KeyCode::Up));
        assert_eq!(picker.selected(), 2);

        let mut picker = FractionPicker::new("Fraction").with_selected(14);
        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.selected(), 15);
        picker.handle_key(key(KeyCode::Right));
        assert_eq!(picker.selected(), 15);
    }

    #[test]
    fn test_enter_applies_selected() {
        let mut picker = FractionPicker::new("Fraction").with_selected(8);
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), PickerAction::Apply(8));
    }

    #[test]
    fn test_esc_cancels() {
        let mut picker = FractionPicker::new("Fraction");
        assert_eq!(picker.handle_key(key(KeyCode::Esc)), PickerAction::Cancel);
    }

    #[test]
    fn test_preselected_value_clamped() {
        assert_eq!(FractionPicker::new("Gap").with_selected(0).selected(), 1);
        assert_eq!(FractionPicker::new("Gap").with_selected(99).selected(), 15);
    }
}

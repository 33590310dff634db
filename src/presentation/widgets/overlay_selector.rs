use crate::domain::entities::{OverlayChoice, OverlayPreset};
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

/// Result of a selector key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySelectorAction {
    None,
    /// An overlay choice was made. `Custom` means the caller should open
    /// the fraction picker for the value.
    Apply(OverlayChoice),
    Cancel,
}

/// Popup list of the four overlay presets plus "Custom...".
pub struct OverlaySelector {
    selected: usize,
    custom_16ths: u8,
}

impl OverlaySelector {
    const OPTION_COUNT: usize = OverlayPreset::ALL.len() + 1;

    /// Opens the selector with the current choice highlighted.
    #[must_use]
    pub fn with_choice(choice: OverlayChoice, custom_16ths: u8) -> Self {
        let selected = match choice {
            OverlayChoice::Preset(preset) => OverlayPreset::ALL
                .into_iter()
                .position(|p| p == preset)
                .unwrap_or(0),
            OverlayChoice::Custom => Self::OPTION_COUNT - 1,
        };
        Self {
            selected,
            custom_16ths,
        }
    }

    /// Currently highlighted row.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key event, returning the chosen overlay on Enter.
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlaySelectorAction {
        match key.code {
            KeyCode::Enter => {
                let choice = if self.selected < OverlayPreset::ALL.len() {
                    OverlayChoice::Preset(OverlayPreset::ALL[self.selected])
                } else {
                    OverlayChoice::Custom
                };
                return OverlaySelectorAction::Apply(choice);
            }
            KeyCode::Esc => return OverlaySelectorAction::Cancel,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(Self::OPTION_COUNT - 1);
            }
            _ => {}
        }
        OverlaySelectorAction::None
    }

    /// Renders the selector as a popup over `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: Option<&Theme>) {
        let (border_style, selected_style) = theme.map_or_else(
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
        );

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Overlay (per side) ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line<'_>> = Vec::with_capacity(Self::OPTION_COUNT + 1);
        for (i, preset) in OverlayPreset::ALL.into_iter().enumerate() {
            let style = if i == self.selected {
                selected_style
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(" {} ", preset.label()),
                style,
            )));
        }

        let custom_label = format!(
            " Custom... (currently {}\") ",
            sixteenths::format_fraction(self.custom_16ths)
        );
        let custom_style = if self.selected == Self::OPTION_COUNT - 1 {
            selected_style
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(custom_label, custom_style)));
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
    fn test_opens_on_current_choice() {
        let selector =
            OverlaySelector::with_choice(OverlayChoice::Preset(OverlayPreset::ThreeQuarters), 12);
        assert_eq!(selector.selected(), 2);

        let selector = OverlaySelector::with_choice(OverlayChoice::Custom, 9);
        assert_eq!(selector.selected(), 4);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut selector =
            OverlaySelector::with_choice(OverlayChoice::Preset(OverlayPreset::Half), 12);
        selector.handle_key(key(KeyCode::Up));
        assert_eq!(selector.selected(), 0);

        for _ in 0..10 {
            selector.handle_key(key(KeyCode::Down));
        }
        assert_eq!(selector.selected(), 4);
    }

    #[test]
    fn test_enter_applies_preset() {
        let mut selector =
            OverlaySelector::with_choice(OverlayChoice::Preset(OverlayPreset::Half), 12);
        selector.handle_key(key(KeyCode::Down));
        assert_eq!(
            selector.handle_key(key(KeyCode::Enter)),
            OverlaySelectorAction::Apply(OverlayChoice::Preset(OverlayPreset::FiveEighths))
        );
    }

    #[test]
    fn test_enter_on_last_row_is_custom() {
        let mut selector = OverlaySelector::with_choice(OverlayChoice::Custom, 9);
        assert_eq!(
            selector.handle_key(key(KeyCode::Enter)),
            OverlaySelectorAction::Apply(OverlayChoice::Custom)
        );
    }

    #[test]
    fn test_esc_cancels() {
        let mut selector = OverlaySelector::with_choice(OverlayChoice::default(), 12);
        assert_eq!(
            selector.handle_key(key(KeyCode::Esc)),
            OverlaySelectorAction::Cancel
        );
    }
}

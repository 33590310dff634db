//! The calculator screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::application::{ActiveField, CalcEvent, CalculatorState, SizeSummary};
use crate::domain::entities::OverlayChoice;
use crate::domain::sixteenths;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FieldCard, FieldCardStyle, FooterBar, FooterBarStyle, FractionPicker, KeyHint, OverlaySelector,
    OverlaySelectorAction, PickerAction, ResultsPanel, ResultsPanelStyle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FractionTarget {
    Measurement,
    CustomOverlay,
    CenterGap,
}

enum Popup {
    None,
    Fraction {
        picker: FractionPicker,
        target: FractionTarget,
    },
    Overlay(OverlaySelector),
}

/// Outcome of a key press on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Nothing for the application to do.
    None,
    /// Route an event into the calculator state container.
    Calc(CalcEvent),
    /// Exit the application.
    Exit,
}

/// The single calculator screen: key routing plus rendering. All calculator
/// data lives in the [`CalculatorState`] snapshot owned by the app; the
/// screen only keeps popup state.
pub struct CalculatorScreen {
    popup: Popup,
}

impl CalculatorScreen {
    /// Creates the screen with no popup open.
    #[must_use]
    pub const fn new() -> Self {
        Self { popup: Popup::None }
    }

    /// True while a picker popup is open.
    #[must_use]
    pub const fn has_popup(&self) -> bool {
        !matches!(self.popup, Popup::None)
    }

    /// Handles a key event against the current snapshot.
    pub fn handle_key(&mut self, key: KeyEvent, state: &CalculatorState) -> ScreenEvent {
        match std::mem::replace(&mut self.popup, Popup::None) {
            Popup::Fraction { mut picker, target } => {
                match picker.handle_key(key) {
                    PickerAction::Apply(value) => {
                        return ScreenEvent::Calc(match target {
                            FractionTarget::Measurement => CalcEvent::Fraction(value),
                            FractionTarget::CustomOverlay => CalcEvent::SetCustomOverlay(value),
                            FractionTarget::CenterGap => CalcEvent::SetCenterGap(value),
                        });
                    }
                    PickerAction::Cancel => {}
                    PickerAction::None => {
                        self.popup = Popup::Fraction { picker, target };
                    }
                }
                ScreenEvent::None
            }
            Popup::Overlay(mut selector) => {
                match selector.handle_key(key) {
                    OverlaySelectorAction::Apply(OverlayChoice::Custom) => {
                        // The value itself comes from the shared fraction grid.
                        self.popup = Popup::Fraction {
                            picker: FractionPicker::new("Custom overlay (per side)")
                                .with_selected(state.custom_overlay_16ths),
                            target: FractionTarget::CustomOverlay,
                        };
                    }
                    OverlaySelectorAction::Apply(choice) => {
                        return ScreenEvent::Calc(CalcEvent::SelectOverlay(choice));
                    }
                    OverlaySelectorAction::Cancel => {}
                    OverlaySelectorAction::None => {
                        self.popup = Popup::Overlay(selector);
                    }
                }
                ScreenEvent::None
            }
            Popup::None => self.handle_base_key(key, state),
        }
    }

    fn handle_base_key(&mut self, key: KeyEvent, state: &CalculatorState) -> ScreenEvent {
        if EventHandler::is_quit_event(&key) {
            return ScreenEvent::Exit;
        }

        match key.code {
            KeyCode::Char(c @ '0'..='9') => {
                let digit = c as u8 - b'0';
                ScreenEvent::Calc(CalcEvent::Digit(digit))
            }
            KeyCode::Char('/') | KeyCode::Char('f') => {
                let current = match state.active_field {
                    ActiveField::Width => state.width.fraction_16ths(),
                    ActiveField::Height => state.height.fraction_16ths(),
                };
                self.popup = Popup::Fraction {
                    picker: FractionPicker::new(format!(
                        "{} fraction",
                        state.active_field.display_name()
                    ))
                    .with_selected(current.unwrap_or(1)),
                    target: FractionTarget::Measurement,
                };
                ScreenEvent::None
            }
            KeyCode::Backspace => ScreenEvent::Calc(CalcEvent::Backspace),
            KeyCode::Char('c') | KeyCode::Delete => ScreenEvent::Calc(CalcEvent::Clear),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                ScreenEvent::Calc(CalcEvent::SwapField)
            }
            KeyCode::Char('w') => ScreenEvent::Calc(CalcEvent::SelectField(ActiveField::Width)),
            KeyCode::Char('h') => ScreenEvent::Calc(CalcEvent::SelectField(ActiveField::Height)),
            KeyCode::Char('o') => {
                self.popup = Popup::Overlay(OverlaySelector::with_choice(
                    state.overlay,
                    state.custom_overlay_16ths,
                ));
                ScreenEvent::None
            }
            KeyCode::Char('s') => ScreenEvent::Calc(CalcEvent::ToggleSplit),
            KeyCode::Char('g') => {
                self.popup = Popup::Fraction {
                    picker: FractionPicker::new("Center gap")
                        .with_selected(state.split.center_gap_16ths()),
                    target: FractionTarget::CenterGap,
                };
                ScreenEvent::None
            }
            _ => ScreenEvent::None,
        }
    }

    /// Renders the screen into the frame.
    pub fn render(
        &self,
        state: &CalculatorState,
        summary: &SizeSummary,
        theme: &Theme,
        frame: &mut Frame,
    ) {
        let area = frame.area();
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [title_area, intro_area, fields_area, overlay_area, split_area, results_area, _, footer_area] =
            vertical.areas(area);

        let title = Paragraph::new(Span::styled(
            "Overlay Door Calculator",
            theme.active_style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let intro = Paragraph::new(Span::styled(
            "Enter opening size. Overlay is applied per side (width: left+right, height: top+bottom).",
            theme.dimmed_style,
        ));
        frame.render_widget(intro, intro_area);

        let horizontal =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]);
        let [width_area, height_area] = horizontal.areas(fields_area);

        frame.render_widget(
            FieldCard::new("Opening Width", &summary.opening_width)
                .active(state.active_field == ActiveField::Width)
                .style(FieldCardStyle::from_theme(theme)),
            width_area,
        );
        frame.render_widget(
            FieldCard::new("Opening Height", &summary.opening_height)
                .active(state.active_field == ActiveField::Height)
                .style(FieldCardStyle::from_theme(theme)),
            height_area,
        );

        let overlay_line = Line::from(vec![
            Span::raw("Overlay (per side): "),
            Span::styled(&summary.overlay, theme.value_style),
            Span::styled("  (o to change)", theme.dimmed_style),
        ]);
        frame.render_widget(Paragraph::new(overlay_line), overlay_area);

        let split_line = if state.split.enabled {
            Line::from(vec![
                Span::raw("Split doors: on, center gap "),
                Span::styled(
                    format!("{}\"", sixteenths::format_fraction(state.split.center_gap_16ths())),
                    theme.value_style,
                ),
                Span::styled("  (s toggle, g gap)", theme.dimmed_style),
            ])
        } else {
            Line::from(vec![
                Span::raw("Split doors: off"),
                Span::styled("  (s toggle)", theme.dimmed_style),
            ])
        };
        frame.render_widget(Paragraph::new(split_line), split_area);

        frame.render_widget(
            ResultsPanel::new(summary).style(ResultsPanelStyle::from_theme(theme)),
            results_area,
        );

        frame.render_widget(
            FooterBar::new(&FOOTER_HINTS).style(FooterBarStyle::from_theme(theme)),
            footer_area,
        );

        match &self.popup {
            Popup::Fraction { picker, .. } => {
                let popup_area = centered(area, 44, 6);
                picker.render(popup_area, frame.buffer_mut(), Some(theme));
            }
            Popup::Overlay(selector) => {
                let popup_area = centered(area, 42, 8);
                selector.render(popup_area, frame.buffer_mut(), Some(theme));
            }
            Popup::None => {}
        }
    }
}

impl Default for CalculatorScreen {
    fn default() -> Self {
        Self::new()
    }
}

const FOOTER_HINTS: [KeyHint; 8] = [
    KeyHint::new("0-9", "Digits"),
    KeyHint::new("/", "Fraction"),
    KeyHint::new("Tab", "Field"),
    KeyHint::new("Bksp", "Undo"),
    KeyHint::new("c", "Clear"),
    KeyHint::new("o", "Overlay"),
    KeyHint::new("s g", "Split"),
    KeyHint::new("q", "Quit"),
];

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

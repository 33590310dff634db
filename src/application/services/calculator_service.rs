//! Calculator state container.
//!
//! The screen holds a [`CalculatorState`] snapshot and replaces it through
//! [`CalculatorService::reduce`] on every input event; no mutable UI-bound
//! state exists anywhere else. [`CalculatorService::summarize`] derives the
//! display strings from a snapshot.

use crate::application::dto::{PerDoorSummary, SizeSummary};
use crate::domain::entities::{Measurement, OverlayChoice, OverlayPreset, SplitConfig};
use crate::domain::services::SizeCalculator;
use crate::domain::sixteenths;

/// Which measurement slot keypad input currently edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveField {
    /// The opening width slot.
    #[default]
    Width,
    /// The opening height slot.
    Height,
}

impl ActiveField {
    /// The other slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Width => "Width",
            Self::Height => "Height",
        }
    }
}

/// Every input the presentation layer can route into the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcEvent {
    /// Append a digit (0-9) to the active measurement.
    Digit(u8),
    /// Set the active measurement's fraction (sixteenths, 1-15 via the grid).
    Fraction(u8),
    /// Remove the last piece of input from the active measurement.
    Backspace,
    /// Reset the active measurement.
    Clear,
    /// Swap which measurement is active.
    SwapField,
    /// Make a specific measurement active.
    SelectField(ActiveField),
    /// Select an overlay preset or the remembered custom value.
    SelectOverlay(OverlayChoice),
    /// Set the custom overlay value and select it.
    SetCustomOverlay(u8),
    /// Toggle split doors.
    ToggleSplit,
    /// Set the center gap between split doors.
    SetCenterGap(u8),
}

/// Immutable snapshot of everything on the calculator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorState {
    /// Which measurement keypad input edits.
    pub active_field: ActiveField,
    /// Opening width as entered.
    pub width: Measurement,
    /// Opening height as entered.
    pub height: Measurement,
    /// Selected overlay allowance.
    pub overlay: OverlayChoice,
    /// Custom overlay value in sixteenths, remembered even while a preset is
    /// selected so switching back to Custom restores it.
    pub custom_overlay_16ths: u8,
    /// Split-door configuration.
    pub split: SplitConfig,
}

impl CalculatorState {
    /// Creates the startup state from configured defaults. An overlay value
    /// matching a preset selects that preset; anything else becomes the
    /// custom selection.
    #[must_use]
    pub fn with_defaults(overlay_16ths: u8, split_doors: bool, center_gap_16ths: u8) -> Self {
        let (overlay, custom_overlay_16ths) = match OverlayPreset::from_sixteenths(overlay_16ths) {
            Some(preset) => (OverlayChoice::Preset(preset), preset.sixteenths()),
            None => (OverlayChoice::Custom, overlay_16ths.clamp(1, 15)),
        };

        Self {
            active_field: ActiveField::default(),
            width: Measurement::new(),
            height: Measurement::new(),
            overlay,
            custom_overlay_16ths,
            split: SplitConfig::new(split_doors, center_gap_16ths),
        }
    }

    /// The effective per-side overlay in sixteenths.
    #[must_use]
    pub const fn per_side_overlay_16ths(&self) -> u8 {
        self.overlay.per_side_sixteenths(self.custom_overlay_16ths)
    }

    const fn active_measurement(&self) -> Measurement {
        match self.active_field {
            ActiveField::Width => self.width,
            ActiveField::Height => self.height,
        }
    }

    const fn with_active_measurement(self, measurement: Measurement) -> Self {
        match self.active_field {
            ActiveField::Width => Self {
                width: measurement,
                ..self
            },
            ActiveField::Height => Self {
                height: measurement,
                ..self
            },
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_defaults(OverlayPreset::default().sixteenths(), true, 2)
    }
}

/// Pure state-transition and summary functions over [`CalculatorState`].
pub struct CalculatorService;

impl CalculatorService {
    /// Applies one input event, returning the next snapshot. Total: every
    /// event maps to a state, out-of-range values are clamped.
    #[must_use]
    pub fn reduce(state: CalculatorState, event: CalcEvent) -> CalculatorState {
        match event {
            CalcEvent::Digit(d) => {
                state.with_active_measurement(state.active_measurement().append_digit(d))
            }
            CalcEvent::Fraction(f16) => {
                state.with_active_measurement(state.active_measurement().with_fraction(f16))
            }
            CalcEvent::Backspace => {
                state.with_active_measurement(state.active_measurement().backspace())
            }
            CalcEvent::Clear => state.with_active_measurement(Measurement::new()),
            CalcEvent::SwapField => CalculatorState {
                active_field: state.active_field.other(),
                ..state
            },
            CalcEvent::SelectField(field) => CalculatorState {
                active_field: field,
                ..state
            },
            CalcEvent::SelectOverlay(choice) => CalculatorState {
                overlay: choice,
                ..state
            },
            CalcEvent::SetCustomOverlay(value) => CalculatorState {
                overlay: OverlayChoice::Custom,
                custom_overlay_16ths: value.clamp(1, 15),
                ..state
            },
            CalcEvent::ToggleSplit => CalculatorState {
                split: state.split.toggled(),
                ..state
            },
            CalcEvent::SetCenterGap(gap) => CalculatorState {
                split: state.split.with_gap(gap),
                ..state
            },
        }
    }

    /// Derives every display string from a snapshot.
    #[must_use]
    pub fn summarize(state: &CalculatorState) -> SizeSummary {
        let overlay_16ths = state.per_side_overlay_16ths();
        let finished = SizeCalculator::finished_size(state.width, state.height, overlay_16ths);

        let per_door = state.split.enabled.then(|| {
            let gap = state.split.center_gap_16ths();
            let per_door = SizeCalculator::per_door(&finished, gap);
            PerDoorSummary {
                width: sixteenths::format_total(per_door.width_16ths),
                center_gap: format!("{}\"", sixteenths::format_fraction(gap)),
            }
        });

        SizeSummary {
            opening_width: state.width.to_string(),
            opening_height: state.height.to_string(),
            overlay: state.overlay.describe(state.custom_overlay_16ths),
            finished_width: sixteenths::format_total(finished.width_16ths),
            finished_height: sixteenths::format_total(finished.height_16ths),
            per_door,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: CalculatorState, events: &[CalcEvent]) -> CalculatorState {
        events
            .iter()
            .fold(state, |s, &e| CalculatorService::reduce(s, e))
    }

    #[test]
    fn test_digits_route_to_active_field() {
        let state = apply(
            CalculatorState::default(),
            &[
                CalcEvent::Digit(2),
                CalcEvent::Digit(4),
                CalcEvent::SwapField,
                CalcEvent::Digit(3),
                CalcEvent::Digit(6),
            ],
        );
        assert_eq!(state.width.inches(), 24);
        assert_eq!(state.height.inches(), 36);
        assert_eq!(state.active_field, ActiveField::Height);
    }

    #[test]
    fn test_fraction_and_backspace_on_active_field() {
        let state = apply(
            CalculatorState::default(),
            &[
                CalcEvent::Digit(3),
                CalcEvent::Fraction(4),
                CalcEvent::Backspace,
            ],
        );
        assert_eq!(state.width.inches(), 3);
        assert_eq!(state.width.fraction_16ths(), None);
    }

    #[test]
    fn test_clear_only_touches_active_field() {
        let state = apply(
            CalculatorState::default(),
            &[
                CalcEvent::Digit(2),
                CalcEvent::SwapField,
                CalcEvent::Digit(9),
                CalcEvent::Clear,
            ],
        );
        assert_eq!(state.width.inches(), 2);
        assert_eq!(state.height.inches(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let once = apply(CalculatorState::default(), &[CalcEvent::Clear]);
        let twice = apply(once, &[CalcEvent::Clear]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_overlay_remembered_across_presets() {
        let state = apply(
            CalculatorState::default(),
            &[
                CalcEvent::SetCustomOverlay(9),
                CalcEvent::SelectOverlay(OverlayChoice::Preset(OverlayPreset::Half)),
            ],
        );
        assert_eq!(state.per_side_overlay_16ths(), 8);

        let state = apply(state, &[CalcEvent::SelectOverlay(OverlayChoice::Custom)]);
        assert_eq!(state.per_side_overlay_16ths(), 9);
    }

    #[test]
    fn test_custom_overlay_clamped() {
        let state = apply(CalculatorState::default(), &[CalcEvent::SetCustomOverlay(0)]);
        assert_eq!(state.custom_overlay_16ths, 1);

        let state = apply(state, &[CalcEvent::SetCustomOverlay(99)]);
        assert_eq!(state.custom_overlay_16ths, 15);
    }

    #[test]
    fn test_split_toggle_and_gap() {
        let state = apply(
            CalculatorState::default(),
            &[CalcEvent::ToggleSplit, CalcEvent::SetCenterGap(4)],
        );
        assert!(!state.split.enabled);
        assert_eq!(state.split.center_gap_16ths(), 4);
    }

    #[test]
    fn test_startup_overlay_maps_to_preset() {
        let state = CalculatorState::with_defaults(10, true, 2);
        assert_eq!(
            state.overlay,
            OverlayChoice::Preset(OverlayPreset::FiveEighths)
        );

        let state = CalculatorState::with_defaults(9, true, 2);
        assert_eq!(state.overlay, OverlayChoice::Custom);
        assert_eq!(state.custom_overlay_16ths, 9);
    }

    #[test]
    fn test_summary_standard_opening() {
        // 24" x 36" opening, 3/4" per side, split with 1/8" gap.
        let state = apply(
            CalculatorState::default(),
            &[
                CalcEvent::Digit(2),
                CalcEvent::Digit(4),
                CalcEvent::SwapField,
                CalcEvent::Digit(3),
                CalcEvent::Digit(6),
            ],
        );
        let summary = CalculatorService::summarize(&state);

        assert_eq!(summary.opening_width, "24");
        assert_eq!(summary.opening_height, "36");
        assert_eq!(summary.overlay, "3/4\" per side (default)");
        assert_eq!(summary.finished_width, "25 1/2\"");
        assert_eq!(summary.finished_height, "37 1/2\"");

        let per_door = summary.per_door.expect("split enabled by default");
        assert_eq!(per_door.width, "12 11/16\"");
        assert_eq!(per_door.center_gap, "1/8\"");
    }

    #[test]
    fn test_summary_without_split() {
        let state = apply(CalculatorState::default(), &[CalcEvent::ToggleSplit]);
        let summary = CalculatorService::summarize(&state);
        assert!(summary.per_door.is_none());
    }
}

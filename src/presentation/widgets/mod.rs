//! Reusable widgets.

mod field_card;
mod footer_bar;
mod fraction_picker;
mod overlay_selector;
mod results_panel;

pub use field_card::{FieldCard, FieldCardStyle};
pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use fraction_picker::{FractionPicker, PickerAction};
pub use overlay_selector::{OverlaySelector, OverlaySelectorAction};
pub use results_panel::{ResultsPanel, ResultsPanelStyle};

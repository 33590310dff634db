//! Entity definitions.

mod measurement;
mod overlay;
mod split;

pub use measurement::{MAX_INCHES, Measurement};
pub use overlay::{OverlayChoice, OverlayPreset};
pub use split::SplitConfig;

//! Domain layer with the measurement engine entities and size arithmetic.

/// Entity definitions.
pub mod entities;
/// Pure calculation services.
pub mod services;
/// Sixteenths-of-an-inch formatting helpers.
pub mod sixteenths;

pub use entities::{Measurement, OverlayChoice, OverlayPreset, SplitConfig};
pub use services::{FinishedSize, PerDoorSize, SizeCalculator};

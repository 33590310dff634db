//! Pure calculation services.

mod size_calculator;

pub use size_calculator::{FinishedSize, PerDoorSize, SizeCalculator};

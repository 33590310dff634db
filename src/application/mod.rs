//! Application layer with the calculator state container and DTOs.

/// Data transfer objects.
pub mod dto;
/// State container services.
pub mod services;

pub use dto::{PerDoorSummary, SizeSummary};
pub use services::{ActiveField, CalcEvent, CalculatorService, CalculatorState};

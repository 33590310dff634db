//! State container services.

mod calculator_service;

pub use calculator_service::{ActiveField, CalcEvent, CalculatorService, CalculatorState};

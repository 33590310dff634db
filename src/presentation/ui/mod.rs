//! UI screens.

mod app;
mod calculator_screen;

pub use app::App;
pub use calculator_screen::{CalculatorScreen, ScreenEvent};

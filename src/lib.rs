//! Doorcalc - an overlay door calculator for the terminal.
//!
//! This crate converts cabinet opening measurements into finished door sizes
//! with clean architecture: a pure measurement engine in the domain layer,
//! a state container in the application layer, and a ratatui interface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the calculator state container and DTOs.
pub mod application;
/// Domain layer containing measurement entities and size arithmetic.
pub mod domain;
/// Infrastructure layer containing configuration handling.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "doorcalc";

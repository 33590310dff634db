//! Infrastructure layer with configuration handling.

/// Application configuration.
pub mod config;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};

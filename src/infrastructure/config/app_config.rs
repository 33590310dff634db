//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "doorcalc";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "doorcalc";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI defaults.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI defaults applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Per-side overlay in sixteenths. Values matching a preset (8, 10, 12,
    /// 16) select that preset; anything else becomes the custom selection.
    #[serde(default = "default_overlay_16ths")]
    pub overlay_16ths: u8,

    /// Start with split doors enabled.
    #[serde(default = "default_true")]
    pub split_doors: bool,

    /// Center gap between split doors, in sixteenths.
    #[serde(default = "default_center_gap_16ths")]
    pub center_gap_16ths: u8,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            overlay_16ths: default_overlay_16ths(),
            split_doors: true,
            center_gap_16ths: default_center_gap_16ths(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_overlay_16ths() -> u8 {
    12
}

fn default_center_gap_16ths() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(overlay) = args.overlay {
            self.ui.overlay_16ths = overlay;
        }
        if args.no_split {
            self.ui.split_doors = false;
        }
        if let Some(center_gap) = args.center_gap {
            self.ui.center_gap_16ths = center_gap;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("doorcalc.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            log_level = "debug"

            [ui]
            overlay_16ths = 10
            split_doors = false

            [theme]
            accent_color = "#FF8800"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ui.overlay_16ths, 10);
        assert!(!config.ui.split_doors);
        assert_eq!(config.ui.center_gap_16ths, 2); // default preserved
        assert_eq!(config.theme.accent_color, "#FF8800");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.ui.overlay_16ths, 12);
        assert!(config.ui.split_doors);
        assert_eq!(config.ui.center_gap_16ths, 2);
        assert_eq!(config.theme.accent_color, "Cyan");
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Warn),
            overlay: Some(9),
            no_split: true,
            center_gap: Some(4),
            accent_color: Some("Magenta".to_string()),
        };

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.ui.overlay_16ths, 9);
        assert!(!config.ui.split_doors);
        assert_eq!(config.ui.center_gap_16ths, 4);
        assert_eq!(config.theme.accent_color, "Magenta");
    }
}

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "doorcalc",
    version,
    about = "A cabinet door overlay calculator for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Per-side overlay at startup, in sixteenths of an inch.
    #[arg(long, value_name = "SIXTEENTHS")]
    pub overlay: Option<u8>,

    /// Start with split doors disabled.
    #[arg(long)]
    pub no_split: bool,

    /// Center gap between split doors, in sixteenths of an inch.
    #[arg(long, value_name = "SIXTEENTHS")]
    pub center_gap: Option<u8>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}

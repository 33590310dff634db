use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use doorcalc::infrastructure::{AppConfig, CliArgs, StorageManager};
use doorcalc::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = doorcalc::VERSION, "Starting doorcalc");

    let app = App::new(&config);

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal);

    ratatui::restore();

    result
}

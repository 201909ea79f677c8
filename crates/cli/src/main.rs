mod app;
mod table;

use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use tracing_subscriber::{prelude::*, EnvFilter};
use trains_core::{
    config::{self, AppConfig},
    TrainStore,
};

fn main() -> Result<()> {
    config::ensure_default_config()?;
    let config = AppConfig::load()?;
    init_logging(&config)?;

    let store = TrainStore::new();
    let mut app = app::TrainsApp::new(store, config);
    app.run()
}

fn init_logging(config: &AppConfig) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let log_path = config.log_file.clone();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Log lines go to the file only; stdout belongs to the prompt.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}

//! Application configuration for the command-line frontend.
//!
//! Everything here concerns the surrounding process (log sink, prompt
//! history); the store itself takes no configuration.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

/// Directory name under the user config root.
const CONFIG_DIR: &str = "trains";

/// Template written on first run.
const DEFAULT_CONFIG: &str = r#"# trains configuration
#
# log_file: file the audit log is appended to.
# history_file: readline history for the interactive prompt.
#
# log_file = "logs/trains.log"
# history_file = ""
"#;

/// Settings consumed by the interactive frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// File the process-wide audit log is appended to.
    pub log_file: PathBuf,
    /// File the interactive prompt persists its history in.
    pub history_file: PathBuf,
}

impl AppConfig {
    /// Load configuration, overlaying the user's file over defaults.
    pub fn load() -> Result<Self> {
        let default_history = config_root().join("history.txt");
        let settings = Config::builder()
            .set_default("log_file", "logs/trains.log")?
            .set_default("history_file", default_history.to_string_lossy().as_ref())?
            .add_source(File::from(config_file()).required(false))
            .build()
            .context("failed to assemble configuration")?;
        settings
            .try_deserialize()
            .context("failed to parse configuration")
    }
}

/// Root directory holding the configuration and history files.
pub fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

fn config_file() -> PathBuf {
    config_root().join("config.toml")
}

/// Write a commented default configuration file when none exists.
pub fn ensure_default_config() -> Result<()> {
    let path = config_file();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))
}

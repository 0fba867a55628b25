//! Tracing subscriber setup.

use crate::config::PlayzoneConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Write to stderr (line-oriented commands).
    Stderr,
    /// Drop everything (the terminal UI owns the screen).
    Discard,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init(config: &PlayzoneConfig, fallback: Fallback) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (config.log_file(), fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (None, Fallback::Stderr) => builder.with_writer(std::io::stderr).try_init(),
        (None, Fallback::Discard) => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

use std::{fs::File, path::PathBuf, sync::Mutex};

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::config::Config;

pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

pub fn log_path(config: &Config) -> PathBuf {
    config.data_dir.join(LOG_FILE)
}

/// Routes tracing output to a file, since the terminal belongs to the UI.
pub fn initialize_logging(config: &Config) -> color_eyre::Result<()> {
    std::fs::create_dir_all(&config.data_dir)?;
    let log_file = File::create(log_path(config))?;

    let filter = EnvFilter::try_new(&config.log_filter)?;
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(log_file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

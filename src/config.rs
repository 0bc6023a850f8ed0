use std::{env, path::PathBuf};

use directories::ProjectDirs;
use reqwest::Url;

use crate::error::ConfigError;

pub const BACKEND_URL_VAR: &str = "VIBELIST_BACKEND_URL";
pub const LOG_FILTER_VAR: &str = "VIBELIST_LOG";
pub const DATA_DIR_VAR: &str = "VIBELIST_DATA";

const DEFAULT_LOG_FILTER: &str = "vibelist=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub log_filter: String,
    pub data_dir: PathBuf,
}

impl Config {
    /// Reads the process environment once; call after `dotenv` has run.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(BACKEND_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingBackendUrl)?;
        let backend_url = normalize_base_url(&raw)?;

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Ok(Self {
            backend_url,
            log_filter,
            data_dir,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| ConfigError::InvalidBackendUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    Ok(trimmed.to_string())
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".data"))
}

use thiserror::Error;

/// Failures talking to the recommendation backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS, IO or a non-2xx status.
    #[error("request to recommendation backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("recommendation task ended without an answer")]
    Interrupted,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("VIBELIST_BACKEND_URL must be set to the recommendation backend base url")]
    MissingBackendUrl,

    #[error("invalid backend url `{url}`: {reason}")]
    InvalidBackendUrl { url: String, reason: String },
}

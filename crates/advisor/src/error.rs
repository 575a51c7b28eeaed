use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of an advisory source. Never shown to the user: the best-effort
/// layers log them and fall back to a static note.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("missing API key")]
    MissingCredentials,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error("empty response")]
    EmptyResponse,
    #[error("malformed advisory: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("incomplete advisory")]
    Incomplete,
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

use std::{io, path::PathBuf};

use shared::error::ProtocolViolation;
use thiserror::Error;

/// Every way a classification call can fail. The desktop controller treats all
/// of them the same way; the variants exist for logging and the detail line.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to build http client: {0}")]
    Setup(#[source] reqwest::Error),
    #[error("classification service unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("classification service did not answer within {seconds}s")]
    Timeout { seconds: u64 },
    #[error("classification service returned http {status}")]
    HttpStatus { status: u16 },
    #[error("classification response is not valid json: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("classification response rejected: {0}")]
    Protocol(#[from] ProtocolViolation),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid endpoint url '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },
    #[error("invalid request timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3001/predict";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const SETTINGS_FILE_NAME: &str = "mood_screen.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint_url: Url,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint_url: Url::parse(DEFAULT_ENDPOINT_URL).expect("default endpoint url is valid"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientSettings {
    /// Replaces the endpoint with a launcher-supplied value.
    pub fn with_endpoint(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.endpoint_url = parse_endpoint_url(raw)?;
        Ok(self)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint_url: Option<String>,
    request_timeout_seconds: Option<u64>,
}

/// Loads settings from defaults, then the settings file, then the environment.
///
/// Without an explicit `config_path` the file is looked up in the working
/// directory and may be absent. An explicit path must exist.
pub fn load_settings(config_path: Option<&Path>) -> Result<ClientSettings, ConfigError> {
    let (path, required) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(SETTINGS_FILE_NAME), false),
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => None,
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    resolve_settings(raw.as_deref(), |name| std::env::var(name).ok())
}

pub fn resolve_settings(
    file_raw: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, ConfigError> {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file_raw {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.endpoint_url {
            settings.endpoint_url = parse_endpoint_url(&v)?;
        }
        if let Some(v) = file_cfg.request_timeout_seconds {
            settings.request_timeout = timeout_from_seconds(v)?;
        }
    }

    let read_env = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read_env("CLASSIFIER_ENDPOINT_URL") {
        settings.endpoint_url = parse_endpoint_url(&v)?;
    }
    if let Some(v) = read_env("APP__ENDPOINT_URL") {
        settings.endpoint_url = parse_endpoint_url(&v)?;
    }

    if let Some(v) = read_env("APP__REQUEST_TIMEOUT_SECONDS") {
        let seconds = v
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout(v.clone()))?;
        settings.request_timeout = timeout_from_seconds(seconds)?;
    }

    Ok(settings)
}

fn parse_endpoint_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

fn timeout_from_seconds(seconds: u64) -> Result<Duration, ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::InvalidTimeout(seconds.to_string()));
    }
    Ok(Duration::from_secs(seconds))
}

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Classification,
    protocol::{ClassifyRequest, ClassifyResponse},
};
use tracing::{info, warn};
use url::Url;

pub mod config;
pub mod error;

pub use config::{load_settings, ClientSettings};
pub use error::{ClassifyError, ConfigError};

/// Seam between the desktop controller and the classification service.
#[async_trait]
pub trait ClassifierClient: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;
}

pub struct HttpClassifierClient {
    http: Client,
    endpoint_url: Url,
    timeout_seconds: u64,
}

impl HttpClassifierClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClassifyError> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(ClassifyError::Setup)?;
        Ok(Self {
            http,
            endpoint_url: settings.endpoint_url.clone(),
            timeout_seconds: settings.request_timeout.as_secs(),
        })
    }

    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    fn transport_error(&self, err: reqwest::Error) -> ClassifyError {
        if err.is_timeout() {
            ClassifyError::Timeout {
                seconds: self.timeout_seconds,
            }
        } else {
            ClassifyError::Network(err)
        }
    }
}

#[async_trait]
impl ClassifierClient for HttpClassifierClient {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        info!(
            endpoint = %self.endpoint_url,
            text_len = text.len(),
            "classify: sending request"
        );

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(self.endpoint_url.clone())
            .json(&ClassifyRequest::new(text))
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "classify: service returned error status");
            return Err(ClassifyError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;
        let wire: ClassifyResponse = serde_json::from_slice(&body).inspect_err(|err| {
            warn!(body_len = body.len(), "classify: response body is not valid json: {err}");
        })?;
        let classification = Classification::try_from(wire).inspect_err(|err| {
            warn!("classify: response violates schema: {err}");
        })?;

        info!(
            status = status.as_u16(),
            label = i64::from(classification.label()),
            "classify: verdict received"
        );
        Ok(classification)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

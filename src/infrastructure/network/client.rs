use crate::domain::error::DetectError;
use crate::domain::model::{DetectionRequest, DetectionResponse, HealthStatus, ServiceErrorBody};
use crate::domain::traits::DetectionService;
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

pub const GENERIC_FAILURE: &str = "Detection failed";

/// Detection service reached over HTTP (`POST {endpoint}/detect`).
pub struct HttpDetectionService {
    client: Client,
    detect_url: String,
    health_url: String,
}

impl HttpDetectionService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            detect_url: config.url_for("detect"),
            health_url: config.url_for("health"),
        }
    }

    pub fn detect_url(&self) -> &str {
        &self.detect_url
    }

    /// `GET {endpoint}/health`
    pub async fn health(&self) -> Result<HealthStatus, DetectError> {
        let response = self.client.get(&self.health_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DetectError::Service(format!(
                "Health check returned {}",
                status
            )));
        }
        Ok(response.json::<HealthStatus>().await?)
    }
}

#[async_trait]
impl DetectionService for HttpDetectionService {
    async fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse, DetectError> {
        let response = self
            .client
            .post(&self.detect_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Detection service responded");

        interpret_response(status, &body)
    }
}

/// Map a status and raw body to a response or a service error.
///
/// A failure status uses the body's `error` field when there is one and
/// falls back to [`GENERIC_FAILURE`] otherwise (including an empty or
/// non-JSON body).
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<DetectionResponse, DetectError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ServiceErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(DetectError::Service(message));
    }

    serde_json::from_slice::<DetectionResponse>(body).map_err(|e| DetectError::Decode(e.to_string()))
}

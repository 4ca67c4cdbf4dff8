use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use trafficform_protocol::Payload;

/// What the backend answered to an accepted update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitReceipt {
    pub endpoint: String,
    pub status: u16,
    pub body: Value,
}

/// Issues one POST per payload. Never retries.
#[derive(Debug, Clone)]
pub struct Submitter {
    client: Client,
    base_url: String,
}

impl Submitter {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::Invalid(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn submit(&self, payload: &Payload) -> Result<SubmitReceipt, TransportError> {
        let endpoint = payload.endpoint();
        let url = format!("{}{}", self.base_url, endpoint);

        info!("📤 POST {} ({} entries)", url, payload.len());
        if let Ok(body) = serde_json::to_string(payload) {
            debug!("Body: {}", body);
        }

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to submit to {}: {}", endpoint, e);
                TransportError::from_reqwest(&endpoint, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("❌ {} rejected with {}: {}", endpoint, status, body);
            return Err(TransportError::Status {
                endpoint,
                status,
                body,
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            error!("Unreadable response from {}: {}", endpoint, e);
            TransportError::from_reqwest(&endpoint, e)
        })?;

        info!("✅ {} accepted ({})", endpoint, status);
        Ok(SubmitReceipt {
            endpoint,
            status: status.as_u16(),
            body,
        })
    }
}

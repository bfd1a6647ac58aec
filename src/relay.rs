//! Outbound contact relay.
//!
//! Delivers a contact-form message as a single JSON POST to the configured
//! mail relay endpoint. The endpoint comes from `[relay]` in the config
//! file; there is no builtin default, and a missing endpoint is an error
//! the caller reports rather than a silent drop.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::RelayConfig;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("no relay endpoint configured: set `endpoint` under [relay] in folio.toml")]
    NotConfigured,

    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected the message: status {0}")]
    Status(u16),
}

/// A contact-form submission, serialized as the relay's JSON payload.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub struct RelayClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RelayClient {
    pub fn from_config(client: Client, relay: &RelayConfig) -> Result<Self, RelayError> {
        let endpoint = relay.endpoint.clone().ok_or(RelayError::NotConfigured)?;
        Ok(Self {
            client,
            endpoint,
            timeout: Duration::from_secs(relay.timeout_secs),
        })
    }

    #[cfg(test)]
    fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            timeout: Duration::from_secs(5),
        }
    }

    /// One POST, no retries. Any non-success status is a hard failure.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(self.timeout)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status.as_u16()));
        }

        debug!(endpoint = %self.endpoint, "contact message relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello from the terminal".to_string(),
        }
    }

    #[test]
    fn missing_endpoint_is_not_configured() {
        let relay = RelayConfig::default();
        let result = RelayClient::from_config(Client::new(), &relay);
        assert!(matches!(result, Err(RelayError::NotConfigured)));
    }

    #[tokio::test]
    async fn send_posts_expected_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello from the terminal",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let relay = RelayClient::with_endpoint(format!("{}/send", server.uri()));
        relay.send(&sample_message()).await.unwrap();
    }

    #[tokio::test]
    async fn send_surfaces_rejection_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let relay = RelayClient::with_endpoint(format!("{}/send", server.uri()));
        let result = relay.send(&sample_message()).await;
        assert!(matches!(result, Err(RelayError::Status(422))));
    }

    #[tokio::test]
    async fn send_surfaces_connection_failure() {
        let relay = RelayClient::with_endpoint("http://127.0.0.1:1/send".to_string());
        let result = relay.send(&sample_message()).await;
        assert!(matches!(result, Err(RelayError::Http(_))));
    }
}

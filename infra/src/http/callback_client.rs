//! HTTP client for the submission service's callback endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use sms_core::errors::DomainError;
use sms_core::services::CallbackSender;
use sms_shared::types::CallbackPayload;

use crate::config::CallbackConfig;
use crate::error::InfrastructureError;

/// Reqwest-based implementation of [`CallbackSender`].
pub struct HttpCallbackClient {
    client: reqwest::Client,
    callback_url: String,
}

impl HttpCallbackClient {
    /// Build a client targeting `{base_url}/api/sms/callback`.
    pub fn new(config: &CallbackConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Http(format!("Failed to build HTTP client: {}", e))
            })?;

        let callback_url = format!(
            "{}/api/sms/callback",
            config.base_url.trim_end_matches('/')
        );

        Ok(Self {
            client,
            callback_url,
        })
    }
}

#[async_trait]
impl CallbackSender for HttpCallbackClient {
    async fn send_callback(&self, payload: &CallbackPayload) -> Result<u16, DomainError> {
        debug!(id = %payload.id, url = %self.callback_url, "posting delivery callback");

        let response = self
            .client
            .post(&self.callback_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Callback request failed: {}", e),
            })?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_url_is_built_from_base_url() {
        let client = HttpCallbackClient::new(&CallbackConfig {
            base_url: "http://127.0.0.1:8080/".to_string(),
            timeout_secs: 10,
        })
        .unwrap();
        assert_eq!(client.callback_url, "http://127.0.0.1:8080/api/sms/callback");
    }
}

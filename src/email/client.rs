//! HTTP client for the EmailJS REST API
//!
//! Posts templated messages to EmailJS the same way the browser SDK does,
//! with the public key carried as `user_id`.

use super::traits::{DispatchError, EmailDispatcher, TemplateParams};
use async_trait::async_trait;
use serde::Serialize;

/// Default EmailJS send endpoint
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Request body expected by the send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Client for the EmailJS send endpoint
#[derive(Clone)]
pub struct EmailJsClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl EmailJsClient {
    /// Create a client for the given endpoint.
    ///
    /// No request timeout is configured; a send waits for the provider.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl EmailDispatcher for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<(), DispatchError> {
        let request = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: params,
        };

        tracing::debug!(service_id, template_id, "posting message to EmailJS");

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

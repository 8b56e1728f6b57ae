//! Trait abstraction for email dispatch to enable mocking in tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template variables sent with every contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

/// Why the email provider did not accept a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Network or TLS failure before a response arrived
    #[error("transport error: {0}")]
    Transport(String),
    /// The provider answered with a non-success status
    #[error("rejected by provider ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Transactional email provider operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    /// Send one templated message.
    ///
    /// Resolves once the provider has accepted the message; the content of
    /// the acceptance is not inspected.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<(), DispatchError>;
}

// src/services/forwarder.rs
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::{
    config::ForwarderConfig,
    error::ForwardError,
    message::{ForwardedPayload, QueryRequest},
};

const USER_AGENT: &str = concat!("notebook-forwarder/", env!("CARGO_PKG_VERSION"));

/// Relays notebook questions to the upstream webhook.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    config: ForwarderConfig,
}

impl Forwarder {
    pub fn new(config: ForwarderConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: ForwarderConfig) -> Self {
        Self { client, config }
    }

    /// Parses a raw request body and forwards it.
    pub async fn forward_body(&self, body: &[u8]) -> Result<Value, ForwardError> {
        let request: QueryRequest =
            serde_json::from_slice(body).map_err(ForwardError::invalid_body)?;
        self.forward(request).await
    }

    /// Validates the request, posts the payload upstream and returns the
    /// upstream JSON untouched.
    pub async fn forward(&self, request: QueryRequest) -> Result<Value, ForwardError> {
        let (question, notebook_id) = match (non_empty(&request.question), non_empty(&request.notebook_id)) {
            (Some(q), Some(n)) => (q, n),
            _ => return Err(ForwardError::missing_fields()),
        };

        let (url, auth) = self.config.endpoint()?;

        let payload = ForwardedPayload::new(notebook_id, question, request.user_id.as_deref());

        let span = info_span!(
            "forward_query",
            request_id = %Uuid::new_v4(),
            notebook_id = %payload.session_id,
        );

        async move {
            tracing::info!(url, user_id = %payload.user_id, "forwarding question to webhook");

            let response = self
                .client
                .post(url)
                .header(AUTHORIZATION, auth)
                .json(&payload)
                .send()
                .await
                .map_err(|e| ForwardError::TransportError(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ForwardError::UpstreamError { status: status.as_u16() });
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| ForwardError::TransportError(e.to_string()))?;

            let body: Value = serde_json::from_slice(&bytes)
                .map_err(|e| ForwardError::MalformedUpstreamResponse(e.to_string()))?;

            tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "webhook responded");
            Ok(body)
        }
        .instrument(span)
        .await
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_webhook_settings() {
        let forwarder = Forwarder::new(ForwarderConfig::default());
        assert!(forwarder.is_ok());
    }
}

// src/message.rs
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_USER_ID: &str = "external-user";

/// Inbound body. Required fields stay optional here so that a missing field
/// surfaces as our own error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct QueryRequest {
    pub question: Option<String>,
    pub notebook_id: Option<String>,
    pub user_id: Option<String>,
}

/// Body sent to the upstream webhook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForwardedPayload {
    pub session_id: String,
    pub message: String,
    pub user_id: String,
    pub timestamp: String,
}

impl ForwardedPayload {
    pub fn new(notebook_id: &str, question: &str, user_id: Option<&str>) -> Self {
        let user_id = match user_id {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => DEFAULT_USER_ID.to_string(),
        };

        Self {
            session_id: notebook_id.to_string(),
            message: question.to_string(),
            user_id,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    pub response: Value,
}

impl QueryResponse {
    pub fn ok(response: Value) -> Self {
        Self { success: true, response }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

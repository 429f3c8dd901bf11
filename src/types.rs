// File: src/types.rs
use serde::{Deserialize, Serialize};

use crate::health::HealthStatus;

// === REQUEST STRUCTURES ===

/// Protocol info request. Historically clients sent either `protocol_name`
/// or `protocolName`; both are accepted, camelCase preferred when both are
/// present. The ambiguity is resolved once here, at the transport boundary.
#[derive(Debug, Default, Deserialize)]
pub struct ProtocolInfoRequest {
    pub protocol_name: Option<String>,
    #[serde(rename = "protocolName")]
    pub protocol_name_camel: Option<String>,
}

impl ProtocolInfoRequest {
    pub fn normalized_name(&self) -> Option<&str> {
        self.protocol_name_camel
            .as_deref()
            .or(self.protocol_name.as_deref())
    }
}

/// The question is optional at the serde level so a body without one still
/// deserializes; the handler turns the absence into a structured 400 rather
/// than letting the extractor reject it with a plain-text 422.
#[derive(Debug, Default, Deserialize)]
pub struct ChatQuestionRequest {
    pub question: Option<String>,
}

/// Agent-to-agent message envelope accepted on `/submit`. A missing
/// `message` is a malformed envelope; like the question above, it is kept
/// optional here and rejected with a structured 400 in the handler.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub sender: Option<String>,
    pub destination: Option<String>,
    pub message: Option<ProtocolInfoRequest>,
}

// === RESPONSE STRUCTURES ===

#[derive(Debug, Serialize)]
pub struct ProtocolInfoResponse {
    pub timestamp: i64,
    pub protocol_name: String,
    pub information: String,
    pub agent_address: String,
}

#[derive(Debug, Serialize)]
pub struct ProtocolListResponse {
    pub timestamp: i64,
    /// canonical key -> human-readable name
    pub protocols: std::collections::BTreeMap<String, String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ChatQuestionResponse {
    pub timestamp: i64,
    pub question: String,
    pub answer: String,
    pub agent_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_questions: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub agent_name: String,
    pub agent_address: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: i64,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            error,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Reply on the messaging surface: either a results message or an
/// error-typed message, both delivered with HTTP 200 like the original
/// agent protocol.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SubmitReply {
    Results(SubmitResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub results: String,
}

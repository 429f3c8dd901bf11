//! HTTP request handlers for the info agent
//!
//! Every handler marshals into the same resolver core; resolver failures are
//! converted to transport errors here (404 for unknown protocols, 400 for
//! bad input) and never crash the process.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::Json as ResponseJson,
};
use chrono::Utc;
use tracing::{error, info};

use crate::errors::ResolveError;
use crate::types::*;
use crate::web::AppState;

type ErrorReply = (StatusCode, ResponseJson<ErrorResponse>);

fn resolve_error_reply(err: ResolveError) -> ErrorReply {
    let status = match &err {
        ResolveError::NotFound { .. } => StatusCode::NOT_FOUND,
        ResolveError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
    };
    (status, ResponseJson(ErrorResponse::new(err.to_string())))
}

// === Health handler ===

pub async fn health_check(State(state): State<AppState>) -> ResponseJson<HealthResponse> {
    let status = state.health.status();
    info!("Health check requested: {}", status);
    ResponseJson(HealthResponse {
        status,
        agent_name: state.identity.name.clone(),
        agent_address: state.identity.address.clone(),
        timestamp: Utc::now().timestamp(),
    })
}

// === Protocol handlers ===

pub async fn protocol_info(
    State(state): State<AppState>,
    Json(request): Json<ProtocolInfoRequest>,
) -> Result<ResponseJson<ProtocolInfoResponse>, ErrorReply> {
    let Some(protocol_name) = request.normalized_name() else {
        return Err(resolve_error_reply(ResolveError::InvalidInput {
            reason: "protocol name is required".to_string(),
        }));
    };

    info!("Received protocol info request for: {}", protocol_name);

    match state.registry.resolve(protocol_name) {
        Ok(entry) => Ok(ResponseJson(ProtocolInfoResponse {
            timestamp: Utc::now().timestamp(),
            protocol_name: protocol_name.to_string(),
            information: entry.description.to_string(),
            agent_address: state.identity.address.clone(),
        })),
        Err(e) => {
            info!("Protocol lookup failed: {}", e);
            Err(resolve_error_reply(e))
        }
    }
}

pub async fn list_protocols(State(state): State<AppState>) -> ResponseJson<ProtocolListResponse> {
    info!("Protocol list requested");
    let protocols: std::collections::BTreeMap<String, String> = state
        .registry
        .entries()
        .iter()
        .map(|e| (e.key.to_string(), e.name.to_string()))
        .collect();

    ResponseJson(ProtocolListResponse {
        timestamp: Utc::now().timestamp(),
        count: protocols.len(),
        protocols,
    })
}

// === Chat handler ===

pub async fn chat_question(
    State(state): State<AppState>,
    Json(request): Json<ChatQuestionRequest>,
) -> Result<ResponseJson<ChatQuestionResponse>, ErrorReply> {
    let Some(question) = request.question else {
        return Err(resolve_error_reply(ResolveError::InvalidInput {
            reason: "question is required".to_string(),
        }));
    };

    info!("Received chat question: {}", question);

    match state.faq.answer(&question) {
        Ok(faq_answer) => Ok(ResponseJson(ChatQuestionResponse {
            timestamp: Utc::now().timestamp(),
            question,
            answer: faq_answer.answer,
            agent_address: state.identity.address.clone(),
            suggested_questions: faq_answer.suggested_questions,
        })),
        Err(e) => Err(resolve_error_reply(e)),
    }
}

// === Messaging surface ===

/// Agent envelope endpoint. Mirrors the message-handler contract: once a
/// well-formed envelope is in, the reply is either a results message or an
/// error-typed message, both with HTTP 200. An envelope without a `message`
/// is malformed and rejected with a structured 400 before any reply exists.
pub async fn submit_envelope(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<ResponseJson<SubmitReply>, ErrorReply> {
    let sender = request.sender.as_deref().unwrap_or("unknown");

    let Some(message) = request.message.as_ref() else {
        error!("Malformed envelope from {}: no message", sender);
        return Err((
            StatusCode::BAD_REQUEST,
            ResponseJson(ErrorResponse::new("envelope message is required".to_string())),
        ));
    };

    let Some(protocol_name) = message.normalized_name() else {
        error!("Envelope from {} missing protocol name", sender);
        return Ok(ResponseJson(SubmitReply::Error(ErrorResponse::new(
            "protocol name is required".to_string(),
        ))));
    };

    info!(
        "Received protocol info envelope from {} for {}",
        sender, protocol_name
    );

    match state.registry.resolve(protocol_name) {
        Ok(entry) => {
            info!("Retrieved information for {}", protocol_name);
            Ok(ResponseJson(SubmitReply::Results(SubmitResponse {
                results: entry.description.to_string(),
            })))
        }
        Err(e) => {
            error!("Envelope lookup failed: {}", e);
            Ok(ResponseJson(SubmitReply::Error(ErrorResponse::new(
                e.to_string(),
            ))))
        }
    }
}

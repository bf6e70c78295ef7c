use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::{error, info};

use crate::api::types::ChatRequest;
use crate::api::AppState;
use crate::error::RelayError;

pub async fn health() -> &'static str {
    "Backend is running. Use POST /api/chat"
}

/// Capability probe; answered without touching the upstream.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

/// POST /api/chat — forward `{model, messages}` to the provider and hand the
/// reply back unchanged. Every failure becomes a JSON response; nothing
/// propagates past this handler.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<(StatusCode, Json<Value>), RelayError> {
    info!(
        model = payload.model.as_deref().unwrap_or("<default>"),
        message_count = payload.messages.len(),
        "relaying chat request"
    );

    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(RelayError::MissingCredential)?;

    let model = payload
        .model
        .as_deref()
        .unwrap_or(&state.config.default_model);

    let reply = state
        .upstream
        .chat_completions(api_key, model, &payload.messages)
        .await
        .map_err(|e| {
            error!("upstream call failed: {e:#}");
            RelayError::UpstreamUnavailable(e.to_string())
        })?;

    info!(status = %reply.status, "upstream responded");
    if !reply.status.is_success() {
        error!(status = %reply.status, body = %reply.body, "upstream error");
    }

    Ok((reply.status, Json(reply.body)))
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures produced by the relay itself. Upstream provider errors are not
/// represented here: a non-2xx provider status is passed through verbatim.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing OPENROUTER_API_KEY")]
    MissingCredential,

    /// Transport failure or unparseable upstream body; carries the
    /// underlying failure description.
    #[error("{0}")]
    UpstreamUnavailable(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingCredential | RelayError::UpstreamUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_not_allowed_maps_to_405() {
        assert_eq!(
            RelayError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(RelayError::MethodNotAllowed.to_string(), "Method not allowed");
    }

    #[test]
    fn missing_credential_names_the_env_var() {
        let err = RelayError::MissingCredential;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn upstream_failure_keeps_the_underlying_message() {
        let err = RelayError::UpstreamUnavailable("connection refused".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "connection refused");
    }
}

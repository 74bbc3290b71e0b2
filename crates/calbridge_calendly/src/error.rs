// --- File: crates/calbridge_calendly/src/error.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calbridge_common::{
    config_error, external_service_error, validation_error, BridgeError, HttpStatusCode,
};
use serde_json::json;
use thiserror::Error;

use crate::models::{UpstreamErrorBody, ValidationIssue};

/// Calendly-specific error types.
///
/// Every facade operation reports failures through this enum so callers can
/// tell local validation, upstream rejections and transport failures apart.
#[derive(Error, Debug)]
pub enum CalendlyError {
    /// The inbound request was rejected before anything was sent upstream
    #[error("Invalid request: {}", describe_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// Calendly answered with a status other than the expected one
    #[error("Calendly returned {status}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Calendly request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Calendly answered with a body that is not the expected JSON
    #[error("Failed to parse Calendly response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The client could not be built from the configuration
    #[error("Calendly client configuration error: {0}")]
    Config(String),
}

fn describe_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.loc.join("."), issue.msg))
        .collect::<Vec<_>>()
        .join("; ")
}

impl CalendlyError {
    pub fn validation(issue: ValidationIssue) -> Self {
        CalendlyError::Validation(vec![issue])
    }
}

/// Convert CalendlyError to BridgeError
impl From<CalendlyError> for BridgeError {
    fn from(err: CalendlyError) -> Self {
        match err {
            CalendlyError::Validation(issues) => validation_error(describe_issues(&issues)),
            CalendlyError::Upstream { status, body } => external_service_error(
                "Calendly API",
                format!("Status: {}, Message: {}", status, body),
            ),
            CalendlyError::Transport(e) => {
                BridgeError::HttpError(format!("Calendly request error: {}", e))
            }
            CalendlyError::Parse(e) => external_service_error(
                "Calendly API",
                format!("unexpected response body: {}", e),
            ),
            CalendlyError::Config(msg) => config_error(msg),
        }
    }
}

impl HttpStatusCode for CalendlyError {
    fn status_code(&self) -> u16 {
        match self {
            CalendlyError::Validation(_) => 422,
            // Rejections are reported in the body, see `IntoResponse` below.
            CalendlyError::Upstream { .. } => 200,
            CalendlyError::Transport(_) => 500,
            CalendlyError::Parse(_) => 502,
            CalendlyError::Config(_) => 500,
        }
    }
}

impl IntoResponse for CalendlyError {
    fn into_response(self) -> Response {
        match self {
            CalendlyError::Validation(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": issues })),
            )
                .into_response(),
            // Upstream rejections keep the soft envelope: callers inspect the
            // body, not the status.
            CalendlyError::Upstream { status, body } => Json(UpstreamErrorBody {
                error: format!("Calendly returned {}", status),
                details: body,
            })
            .into_response(),
            other => BridgeError::from(other).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_renders_422_detail() {
        let err = CalendlyError::validation(ValidationIssue::new(
            "query",
            "appointment_type",
            "Invalid appointment_type.",
            "value_error.invalid_appointment_type",
        ));
        assert_eq!(err.status_code(), 422);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["detail"][0]["loc"], json!(["query", "appointment_type"]));
        assert_eq!(body["detail"][0]["type"], "value_error.invalid_appointment_type");
    }

    #[tokio::test]
    async fn test_upstream_renders_soft_envelope() {
        let response = CalendlyError::Upstream {
            status: 404,
            body: "{\"title\":\"Resource Not Found\"}".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Calendly returned 404");
        assert_eq!(body["details"], "{\"title\":\"Resource Not Found\"}");
    }

    #[tokio::test]
    async fn test_parse_error_renders_bad_gateway() {
        let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let response = CalendlyError::from(parse).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], 502);
    }

    #[tokio::test]
    async fn test_transport_error_renders_server_error() {
        let transport = reqwest::get("http://127.0.0.1:1/").await.unwrap_err();
        let err: BridgeError = CalendlyError::from(transport).into();
        assert!(matches!(err, BridgeError::HttpError(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], 500);
    }

    #[test]
    fn test_config_error_converts() {
        let err: BridgeError = CalendlyError::Config("bad token".to_string()).into();
        assert!(matches!(err, BridgeError::ConfigError(_)));
    }

    #[test]
    fn test_display_lists_issues() {
        let err = CalendlyError::Validation(vec![
            ValidationIssue::missing("query", "start_time"),
            ValidationIssue::missing("query", "end_time"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid request: query.start_time: Field required; query.end_time: Field required"
        );
    }
}

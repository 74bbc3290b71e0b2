// --- File: crates/calbridge_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{BridgeError, HttpStatusCode};

// Include the client module
pub mod client;

/// Extension trait for BridgeError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for BridgeError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_message = self.to_string();

        let body = Json(json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for BridgeError to make it easier to use in Axum handlers.
impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::external_service_error;

    #[test]
    fn test_error_response_status() {
        let response = BridgeError::HttpError("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = external_service_error("Calendly", "bad body").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

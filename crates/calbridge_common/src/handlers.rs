// --- File: crates/calbridge_common/src/handlers.rs ---

use axum::Json;

use crate::models::StatusMessage;

pub const ROOT_MESSAGE: &str = "Calendly Connection Test API is running!";

/// Simple health check.
pub async fn root_handler() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: ROOT_MESSAGE.to_string(),
    })
}

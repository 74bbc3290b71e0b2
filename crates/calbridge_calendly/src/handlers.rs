// --- File: crates/calbridge_calendly/src/handlers.rs ---
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use calbridge_common::services::SchedulingService;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use crate::error::CalendlyError;
use crate::logic::{build_scheduling_link_request, validate_availability_query};
use crate::models::{AvailabilityQuery, BookingRequest, ConnectionTestResponse, ValidationIssue};

/// The scheduling backend the handlers talk to.
pub type SharedScheduling = Arc<dyn SchedulingService<Error = CalendlyError>>;

pub const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to Calendly";

// --- State for Calendly Handlers ---
#[derive(Clone)]
pub struct CalendlyState {
    pub service: SharedScheduling,
}

/// Triggers a Calendly connection test.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/test-connection", // Path relative to /api
    responses(
        (status = 200, description = "Connection result; `status` is `success` or `error`", body = ConnectionTestResponse)
    ),
    tag = "Calendly"
))]
pub async fn test_connection_handler(
    State(state): State<Arc<CalendlyState>>,
) -> Json<ConnectionTestResponse> {
    match state.service.verify_connection().await {
        Ok(payload) => {
            match payload.pointer("/resource/name").and_then(Value::as_str) {
                Some(user) => Json(ConnectionTestResponse::Success {
                    user: user.to_string(),
                }),
                None => {
                    error!("Calendly user payload has no resource.name");
                    connection_failed()
                }
            }
        }
        Err(err) => {
            error!("Error connecting to Calendly: {}", err);
            connection_failed()
        }
    }
}

fn connection_failed() -> Json<ConnectionTestResponse> {
    Json(ConnectionTestResponse::Error {
        message: CONNECTION_FAILED_MESSAGE.to_string(),
    })
}

/// Lists the event types of the connected Calendly user.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/calendly/events", // Path relative to /api
    responses(
        (status = 200, description = "Calendly event type collection, or `{error, details}` when Calendly rejected the call"),
        (status = 500, description = "Calendly could not be reached")
    ),
    tag = "Calendly"
))]
pub async fn list_event_types_handler(
    State(state): State<Arc<CalendlyState>>,
) -> Result<Json<Value>, CalendlyError> {
    let data = state.service.list_event_types().await?;
    Ok(Json(data))
}

/// Fetches availability for a specific event type.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/calendly/availability", // Path relative to /api
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Calendly available times collection, or `{error, details}` when Calendly rejected the call"),
        (status = 422, description = "Missing, repeated or malformed parameter, or invalid appointment_type"),
        (status = 500, description = "Calendly could not be reached")
    ),
    tag = "Calendly"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<CalendlyState>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<Value>, CalendlyError> {
    // e.g. a repeated key; reported like any other query problem
    let Query(query) = query.map_err(|rejection| {
        CalendlyError::validation(ValidationIssue {
            loc: vec!["query".to_string()],
            msg: rejection.body_text(),
            kind: "query_invalid".to_string(),
        })
    })?;

    let window = validate_availability_query(query)?;
    debug!(
        "Availability window for {}: {} → {}",
        window.event_type, window.start_time, window.end_time
    );

    let data = state
        .service
        .get_availability(&window.event_type, &window.start_time, &window.end_time)
        .await?;
    Ok(Json(data))
}

/// Creates a Calendly scheduling link for an event type.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/calendly/book", // Path relative to /api
    request_body = BookingRequest,
    responses(
        (status = 200, description = "The scheduling link created by Calendly, or `{error, details}` when Calendly rejected the call"),
        (status = 422, description = "Missing or invalid appointment_type"),
        (status = 500, description = "Error creating scheduling link")
    ),
    tag = "Calendly"
))]
pub async fn create_scheduling_link_handler(
    State(state): State<Arc<CalendlyState>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<Value>, CalendlyError> {
    let Json(booking) = payload.map_err(|rejection| {
        CalendlyError::validation(ValidationIssue {
            loc: vec!["body".to_string()],
            msg: rejection.body_text(),
            kind: "json_invalid".to_string(),
        })
    })?;

    let request = build_scheduling_link_request(booking)?;
    let data = state.service.create_scheduling_link(request).await?;
    Ok(Json(data))
}

// --- File: crates/calbridge_calendly/src/routes.rs ---

use crate::handlers::{
    create_scheduling_link_handler, get_availability_handler, list_event_types_handler,
    test_connection_handler, CalendlyState, SharedScheduling,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the Calendly feature.
/// Paths are relative to the `/api` prefix the backend nests them under.
pub fn routes(service: SharedScheduling) -> Router {
    let calendly_state = Arc::new(CalendlyState { service });

    Router::new()
        .route("/test-connection", get(test_connection_handler))
        .route("/calendly/events", get(list_event_types_handler))
        .route("/calendly/availability", get(get_availability_handler))
        .route("/calendly/book", post(create_scheduling_link_handler))
        .with_state(calendly_state)
}

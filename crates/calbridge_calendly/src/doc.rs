// --- File: crates/calbridge_calendly/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{BookingRequest, ConnectionTestResponse, UpstreamErrorBody, ValidationIssue};
use calbridge_common::models::{SchedulingLinkRequest, StatusMessage};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::test_connection_handler,
        crate::handlers::list_event_types_handler,
        crate::handlers::get_availability_handler,
        crate::handlers::create_scheduling_link_handler
    ),
    components(
        schemas(
            BookingRequest,
            SchedulingLinkRequest,
            ConnectionTestResponse,
            UpstreamErrorBody,
            ValidationIssue,
            StatusMessage
        )
    ),
    tags(
        (name = "Calendly", description = "Calendly scheduling API bridge")
    )
)]
pub struct CalendlyApiDoc;

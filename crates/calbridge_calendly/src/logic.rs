// --- File: crates/calbridge_calendly/src/logic.rs ---
//! Inbound validation and translation to the Calendly wire format.
//!
//! Nothing in here touches the network: every check runs before an outbound
//! call is attempted.

use calbridge_common::models::{
    SchedulingLinkRequest, DEFAULT_MAX_EVENT_COUNT, DEFAULT_OWNER_TYPE,
};
use serde_json::Value;

use crate::error::CalendlyError;
use crate::models::{AvailabilityQuery, AvailabilityWindow, BookingRequest, ValidationIssue};

/// Every event type URI handed out by Calendly starts with this.
pub const EVENT_TYPE_URI_PREFIX: &str = "https://api.calendly.com/event_types/";

/// Any Calendly resource URI starts with this.
pub const RESOURCE_URI_PREFIX: &str = "https://api.calendly.com/";

pub const INVALID_APPOINTMENT_TYPE: &str = "value_error.invalid_appointment_type";

const AVAILABILITY_APPOINTMENT_MSG: &str = "Invalid appointment_type. Please provide a valid appointment_type, You can get this from URI key in /api/calendly/events";
const BOOKING_APPOINTMENT_MSG: &str =
    "Invalid appointment_type. Please provide a valid event type URI.";

/// Checks an availability query and returns the window to forward.
///
/// Missing parameters are all reported together; the prefix check on
/// `appointment_type` only runs once every parameter is present. The time
/// strings are passed through untouched (no ordering check).
pub fn validate_availability_query(
    query: AvailabilityQuery,
) -> Result<AvailabilityWindow, CalendlyError> {
    let AvailabilityQuery {
        appointment_type,
        start_time,
        end_time,
    } = query;

    let missing: Vec<ValidationIssue> = [
        ("appointment_type", appointment_type.is_none()),
        ("start_time", start_time.is_none()),
        ("end_time", end_time.is_none()),
    ]
    .into_iter()
    .filter(|(_, is_missing)| *is_missing)
    .map(|(field, _)| ValidationIssue::missing("query", field))
    .collect();

    let (Some(event_type), Some(start_time), Some(end_time)) =
        (appointment_type, start_time, end_time)
    else {
        return Err(CalendlyError::Validation(missing));
    };

    if !event_type.starts_with(EVENT_TYPE_URI_PREFIX) {
        return Err(CalendlyError::validation(ValidationIssue::new(
            "query",
            "appointment_type",
            AVAILABILITY_APPOINTMENT_MSG,
            INVALID_APPOINTMENT_TYPE,
        )));
    }

    Ok(AvailabilityWindow {
        event_type,
        start_time,
        end_time,
    })
}

/// Translates an inbound booking into the scheduling link payload.
///
/// `appointment_type` becomes `owner`; `max_event_count` defaults to 1 and
/// `owner_type` to `"EventType"`.
pub fn build_scheduling_link_request(
    booking: BookingRequest,
) -> Result<SchedulingLinkRequest, CalendlyError> {
    let owner = match booking.appointment_type {
        Some(uri) if uri.starts_with(RESOURCE_URI_PREFIX) => uri,
        _ => {
            return Err(CalendlyError::validation(ValidationIssue::new(
                "body",
                "appointment_type",
                BOOKING_APPOINTMENT_MSG,
                INVALID_APPOINTMENT_TYPE,
            )))
        }
    };

    Ok(SchedulingLinkRequest {
        max_event_count: booking.max_event_count.unwrap_or(DEFAULT_MAX_EVENT_COUNT),
        owner,
        owner_type: booking
            .owner_type
            .unwrap_or_else(|| DEFAULT_OWNER_TYPE.to_string()),
    })
}

/// Number of entries in a Calendly list payload (`collection`), 0 if absent.
pub fn collection_len(payload: &Value) -> usize {
    payload
        .get("collection")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

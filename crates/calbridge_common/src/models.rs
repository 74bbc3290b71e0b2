// --- File: crates/calbridge_common/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Owner type used when the caller does not name one.
pub const DEFAULT_OWNER_TYPE: &str = "EventType";

/// Number of bookings a scheduling link allows when the caller does not say.
pub const DEFAULT_MAX_EVENT_COUNT: i64 = 1;

/// Payload sent to the provider to create a scheduling link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SchedulingLinkRequest {
    /// How many events may be booked through the link
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub max_event_count: i64,

    /// URI of the resource that owns the link, usually an event type
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://api.calendly.com/event_types/d43e47ac-3c94-4f6c-8d20-e1acadf25bc6")
    )]
    pub owner: String,

    /// Kind of the owner resource
    #[cfg_attr(feature = "openapi", schema(example = "EventType"))]
    pub owner_type: String,
}

impl SchedulingLinkRequest {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            max_event_count: DEFAULT_MAX_EVENT_COUNT,
            owner: owner.into(),
            owner_type: DEFAULT_OWNER_TYPE.to_string(),
        }
    }
}

/// Body of the root health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let request = SchedulingLinkRequest::new("https://api.calendly.com/event_types/abc");
        assert_eq!(request.max_event_count, 1);
        assert_eq!(request.owner_type, "EventType");
        assert_eq!(request.owner, "https://api.calendly.com/event_types/abc");
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(SchedulingLinkRequest::new("uri")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"max_event_count": 1, "owner": "uri", "owner_type": "EventType"})
        );
    }
}

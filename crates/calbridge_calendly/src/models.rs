// --- File: crates/calbridge_calendly/src/models.rs ---
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// The authenticated Calendly account, resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Full resource URI, e.g. `https://api.calendly.com/users/AAAA`
    pub uri: String,
    /// Last path segment of `uri`
    pub uuid: String,
}

impl SessionIdentity {
    pub fn from_uri(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let uuid = uri
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self { uri, uuid }
    }
}

/// The parts of `GET /users/me` the bridge relies on.
#[derive(Deserialize, Debug)]
pub struct CurrentUserResponse {
    pub resource: CurrentUserResource,
}

#[derive(Deserialize, Debug)]
pub struct CurrentUserResource {
    pub uri: String,
    pub name: Option<String>,
}

/// Query of `GET /calendly/availability`.
///
/// Every field is optional at the type level so that missing parameters are
/// reported as validation issues instead of a generic extractor rejection.
#[derive(Deserialize, Debug, Default, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Calendly event type URI (from /api/calendly/events)
    #[cfg_attr(
        feature = "openapi",
        param(example = "https://api.calendly.com/event_types/d43e47ac-3c94-4f6c-8d20-e1acadf25bc6")
    )]
    pub appointment_type: Option<String>,
    /// Start time in ISO format, e.g. 2025-11-14T20:00:00.000000Z
    #[cfg_attr(feature = "openapi", param(example = "2025-11-14T20:00:00.000000Z"))]
    pub start_time: Option<String>,
    /// End time in ISO format, e.g. 2025-11-20T20:00:00.000000Z
    #[cfg_attr(feature = "openapi", param(example = "2025-11-20T20:00:00.000000Z"))]
    pub end_time: Option<String>,
}

/// A validated availability query, forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub event_type: String,
    pub start_time: String,
    pub end_time: String,
}

/// Body of `POST /calendly/book`.
#[derive(Deserialize, Debug, Default, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub max_event_count: Option<i64>,
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://api.calendly.com/event_types/d43e47ac-3c94-4f6c-8d20-e1acadf25bc6")
    )]
    pub appointment_type: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "EventType"))]
    pub owner_type: Option<String>,
}

/// One entry of a 422 `{"detail": [...]}` body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ValidationIssue {
    /// Where the offending value came from, e.g. `["query", "appointment_type"]`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new(location: &str, field: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec![location.to_string(), field.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    pub fn missing(location: &str, field: &str) -> Self {
        Self::new(location, field, "Field required", "missing")
    }
}

/// Body returned with status 200 when Calendly rejected a call.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpstreamErrorBody {
    #[cfg_attr(feature = "openapi", schema(example = "Calendly returned 404"))]
    pub error: String,
    /// Raw body text returned by Calendly
    pub details: String,
}

/// Body of `GET /test-connection`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConnectionTestResponse {
    Success { user: String },
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_identity_from_uri() {
        let identity = SessionIdentity::from_uri("https://api.calendly.com/users/ABC-123");
        assert_eq!(identity.uuid, "ABC-123");
        assert_eq!(identity.uri, "https://api.calendly.com/users/ABC-123");

        let trailing = SessionIdentity::from_uri("https://api.calendly.com/users/ABC-123/");
        assert_eq!(trailing.uuid, "ABC-123");
    }

    #[test]
    fn test_connection_response_shape() {
        let success = serde_json::to_value(ConnectionTestResponse::Success {
            user: "Ada Lovelace".to_string(),
        })
        .unwrap();
        assert_eq!(
            success,
            serde_json::json!({"status": "success", "user": "Ada Lovelace"})
        );

        let failure = serde_json::to_value(ConnectionTestResponse::Error {
            message: "Failed to connect to Calendly".to_string(),
        })
        .unwrap();
        assert_eq!(
            failure,
            serde_json::json!({"status": "error", "message": "Failed to connect to Calendly"})
        );
    }

    #[test]
    fn test_validation_issue_serializes_type_key() {
        let value = serde_json::to_value(ValidationIssue::missing("query", "start_time")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"loc": ["query", "start_time"], "msg": "Field required", "type": "missing"})
        );
    }
}

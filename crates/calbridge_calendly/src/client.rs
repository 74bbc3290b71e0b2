//! Calendly API client module
//!
//! `CalendlyClient` is the single gateway to the Calendly REST API. It owns
//! the authenticated HTTP client and the session identity of the account the
//! token belongs to. Each operation is one outbound request whose JSON payload
//! is returned unmodified.

use calbridge_common::create_client;
use calbridge_common::models::SchedulingLinkRequest;
use calbridge_config::CalendlyConfig;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, RequestBuilder, Response, StatusCode,
};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::error::CalendlyError;
use crate::logic::collection_len;
use crate::models::{CurrentUserResponse, SessionIdentity};

/// Client for the Calendly v2 REST API.
pub struct CalendlyClient {
    /// HTTP client carrying the bearer token as a default header
    http: Client,

    /// API root without trailing slash
    base_url: String,

    /// Account behind the token. Filled by the first successful "who am I"
    /// call and never refreshed, the token is fixed for the process lifetime.
    identity: OnceCell<SessionIdentity>,
}

impl CalendlyClient {
    /// Creates a client from the Calendly section of the app config.
    pub fn new(config: &CalendlyConfig) -> Result<Self, CalendlyError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token.trim()))
            .map_err(|e| CalendlyError::Config(format!("API token is not a valid header value: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = create_client(config.timeout(), headers)
            .map_err(|e| CalendlyError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base().to_string(),
            identity: OnceCell::new(),
        })
    }

    /// The cached session identity, if one has been resolved yet.
    pub fn cached_identity(&self) -> Option<&SessionIdentity> {
        self.identity.get()
    }

    /// Calls `GET /users/me` and returns its payload.
    ///
    /// A successful answer also caches the session identity when none is
    /// cached yet. Failures leave the cache untouched.
    pub async fn verify_connection(&self) -> Result<Value, CalendlyError> {
        let (payload, identity) = self.fetch_current_user().await?;
        if self.identity.set(identity).is_err() {
            debug!("Session identity already cached");
        }
        Ok(payload)
    }

    /// Resolves the session identity, calling Calendly only the first time.
    ///
    /// Concurrent first callers share a single request.
    pub async fn session_identity(&self) -> Result<&SessionIdentity, CalendlyError> {
        self.identity
            .get_or_try_init(|| async {
                self.fetch_current_user()
                    .await
                    .map(|(_, identity)| identity)
            })
            .await
    }

    /// Lists the event types owned by the session identity.
    pub async fn list_event_types(&self) -> Result<Value, CalendlyError> {
        let identity = self.session_identity().await?;
        info!("Fetching event types for user: {}", identity.uri);

        let request = self
            .http
            .get(self.url("event_types"))
            .query(&[("user", identity.uri.as_str())]);
        let response = send(request, "event types").await?;
        let data = expect_json(response, StatusCode::OK, "Event types").await?;

        info!("Found {} event types", collection_len(&data));
        Ok(data)
    }

    /// Lists the available start times of an event type in a time range.
    pub async fn get_availability(
        &self,
        event_type_uri: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Value, CalendlyError> {
        info!("Fetching availability for: {}", event_type_uri);
        debug!("Date Range: {} → {}", start_time, end_time);

        let request = self.http.get(self.url("event_type_available_times")).query(&[
            ("event_type", event_type_uri),
            ("start_time", start_time),
            ("end_time", end_time),
        ]);
        let response = send(request, "availability").await?;
        let data = expect_json(response, StatusCode::OK, "Availability").await?;

        info!("Found {} available time slots", collection_len(&data));
        Ok(data)
    }

    /// Creates a scheduling link; Calendly answers 201 on success.
    pub async fn create_scheduling_link(
        &self,
        request: &SchedulingLinkRequest,
    ) -> Result<Value, CalendlyError> {
        let builder = self.http.post(self.url("scheduling_links")).json(request);
        let response = send(builder, "scheduling links").await?;
        let data = expect_json(response, StatusCode::CREATED, "Scheduling links").await?;

        info!("Scheduling link created successfully.");
        Ok(data)
    }

    async fn fetch_current_user(&self) -> Result<(Value, SessionIdentity), CalendlyError> {
        let response = send(self.http.get(self.url("users/me")), "current user").await?;
        let payload = expect_json(response, StatusCode::OK, "Current user").await?;

        let user: CurrentUserResponse = serde_json::from_value(payload.clone())?;
        let identity = SessionIdentity::from_uri(user.resource.uri);
        info!(
            "Connected to Calendly as: {}",
            user.resource.name.as_deref().unwrap_or("<unnamed>")
        );
        debug!("User URI: {}", identity.uri);

        Ok((payload, identity))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

async fn send(request: RequestBuilder, what: &str) -> Result<Response, CalendlyError> {
    request.send().await.map_err(|err| {
        error!("Error calling Calendly {}: {}", what, err);
        CalendlyError::Transport(err)
    })
}

/// Reads the body and turns any status other than `expected` into
/// `CalendlyError::Upstream` carrying the raw body text.
async fn expect_json(
    response: Response,
    expected: StatusCode,
    what: &str,
) -> Result<Value, CalendlyError> {
    let status = response.status();
    let body = response.text().await?;

    if status != expected {
        error!("{} API returned: {} - {}", what, status.as_u16(), body);
        return Err(CalendlyError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

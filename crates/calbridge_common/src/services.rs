// --- File: crates/calbridge_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! HTTP handlers depend on these traits instead of on concrete clients, which
//! keeps the upstream transport replaceable in tests.

use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

use crate::models::SchedulingLinkRequest;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Operations offered by a third-party scheduling provider.
///
/// Every method performs at most one round-trip to the provider (plus the
/// one-off identity lookup for [`SchedulingService::list_event_types`]) and
/// returns the provider's JSON payload unmodified.
pub trait SchedulingService: Send + Sync {
    /// Error type returned by scheduling service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ask the provider who the configured token belongs to.
    fn verify_connection(&self) -> BoxFuture<'_, Value, Self::Error>;

    /// List the bookable event types of the authenticated account.
    fn list_event_types(&self) -> BoxFuture<'_, Value, Self::Error>;

    /// List available start times of an event type within a time range.
    fn get_availability(
        &self,
        event_type_uri: &str,
        start_time: &str,
        end_time: &str,
    ) -> BoxFuture<'_, Value, Self::Error>;

    /// Create a shareable scheduling link.
    fn create_scheduling_link(
        &self,
        request: SchedulingLinkRequest,
    ) -> BoxFuture<'_, Value, Self::Error>;
}

// --- File: crates/calbridge_calendly/src/service.rs ---
use calbridge_common::models::SchedulingLinkRequest;
use calbridge_common::services::{BoxFuture, SchedulingService};
use serde_json::Value;

use crate::client::CalendlyClient;
use crate::error::CalendlyError;

/// Calendly implementation of the scheduling service seam.
impl SchedulingService for CalendlyClient {
    type Error = CalendlyError;

    fn verify_connection(&self) -> BoxFuture<'_, Value, Self::Error> {
        Box::pin(CalendlyClient::verify_connection(self))
    }

    fn list_event_types(&self) -> BoxFuture<'_, Value, Self::Error> {
        Box::pin(CalendlyClient::list_event_types(self))
    }

    fn get_availability(
        &self,
        event_type_uri: &str,
        start_time: &str,
        end_time: &str,
    ) -> BoxFuture<'_, Value, Self::Error> {
        // Own the arguments, the future may only borrow `self`.
        let event_type_uri = event_type_uri.to_string();
        let start_time = start_time.to_string();
        let end_time = end_time.to_string();

        Box::pin(async move {
            CalendlyClient::get_availability(self, &event_type_uri, &start_time, &end_time).await
        })
    }

    fn create_scheduling_link(
        &self,
        request: SchedulingLinkRequest,
    ) -> BoxFuture<'_, Value, Self::Error> {
        Box::pin(async move { CalendlyClient::create_scheduling_link(self, &request).await })
    }
}

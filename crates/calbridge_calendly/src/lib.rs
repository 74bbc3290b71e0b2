// --- File: crates/calbridge_calendly/src/lib.rs ---
//! Calendly integration for the calbridge service.
//!
//! Exposes four operations (connection test, event types, availability,
//! scheduling links) as axum routes, each translating one inbound request into
//! one Calendly API call.

pub mod client;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod routes;
pub mod service;

// Re-export for main backend
pub use client::CalendlyClient;
pub use error::CalendlyError;
pub use handlers::SharedScheduling;
pub use routes::routes;

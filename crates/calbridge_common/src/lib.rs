// --- File: crates/calbridge_common/src/lib.rs ---

// Declare modules within this crate
pub mod models;    // Data structures and models
pub mod handlers;  // HTTP request handlers
pub mod routes;    // Route definitions
pub mod error;     // Error handling
pub mod http;      // HTTP utilities
pub mod services;  // Service abstractions
pub mod logging;   // Logging utilities

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    BridgeError,
    HttpStatusCode,
    config_error,
    validation_error,
    external_service_error,
};

// Re-export HTTP utilities for easier access
pub use http::{
    IntoHttpResponse,
    client::create_client,
};

// Re-export the service seam
pub use services::{BoxFuture, SchedulingService};

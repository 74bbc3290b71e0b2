// --- File: crates/calbridge_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all calbridge crates.
///
/// Integration crates keep their own error enums and implement
/// `From<TheirError> for BridgeError` so that handlers can fall back to one
/// uniform HTTP error body.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for BridgeError {
    fn status_code(&self) -> u16 {
        match self {
            BridgeError::HttpError(_) => 500,
            BridgeError::ConfigError(_) => 500,
            BridgeError::ValidationError(_) => 422,
            BridgeError::ExternalServiceError { .. } => 502,
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> BridgeError {
    BridgeError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> BridgeError {
    BridgeError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> BridgeError {
    BridgeError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

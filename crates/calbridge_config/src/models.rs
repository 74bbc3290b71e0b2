// --- File: crates/calbridge_config/src/models.rs ---

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the public Calendly API.
pub const DEFAULT_CALENDLY_BASE_URL: &str = "https://api.calendly.com";

/// Default timeout applied to every outbound Calendly request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Calendly Config ---
// The token is never part of a config file, it is injected from
// CALBRIDGE_SECRET_CALENDLY_API_TOKEN or CALENDLY_API_TOKEN.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Serialize, Clone)]
pub struct CalendlyConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String, // Overridable via BASE_URL
    #[serde(default, skip_serializing)]
    pub api_token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_CALENDLY_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

impl CalendlyConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Per-request timeout; `0` falls back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    /// Base URL without a trailing slash, ready for `format!("{}/path", ..)`.
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for CalendlyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CALENDLY_BASE_URL, "")
    }
}

// Hand-written so the bearer token never ends up in logs.
impl std::fmt::Debug for CalendlyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendlyConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags ---
    #[serde(default = "default_true")]
    pub use_calendly: bool,

    #[serde(default)]
    pub calendly: CalendlyConfig,
}

impl AppConfig {
    /// Checks the invariants that cannot be expressed through serde defaults.
    ///
    /// A missing API token is fatal: the service cannot talk to Calendly
    /// without it and there is no way to obtain one at runtime.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.calendly.api_token.trim().is_empty() {
            return Err(ConfigError::Message(
                "Missing Calendly API token. Please set CALENDLY_API_TOKEN in your environment."
                    .to_string(),
            ));
        }
        if self.calendly.base_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "Calendly base URL must not be empty (set BASE_URL)".to_string(),
            ));
        }
        Ok(self)
    }
}

// --- File: crates/services/calbridge_backend/src/service_factory.rs ---
//! Builds the scheduling service the HTTP layer talks to.
use calbridge_calendly::{CalendlyClient, SharedScheduling};
use calbridge_common::BridgeError;
use calbridge_config::AppConfig;
use std::sync::Arc;
use tracing::info;

/// Creates the Calendly-backed scheduling service.
///
/// Returns `Ok(None)` when the Calendly feature is switched off in the
/// configuration. No network call happens here.
pub fn create_scheduling_service(
    config: &AppConfig,
) -> Result<Option<SharedScheduling>, BridgeError> {
    if !config.use_calendly {
        info!("Calendly integration disabled (use_calendly = false)");
        return Ok(None);
    }

    let client = CalendlyClient::new(&config.calendly)?;
    info!("Calendly client ready for {}", config.calendly.api_base());
    Ok(Some(Arc::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calbridge_config::{CalendlyConfig, ServerConfig};

    fn config(use_calendly: bool, token: &str) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            use_calendly,
            calendly: CalendlyConfig::new("https://api.calendly.com", token),
        }
    }

    #[test]
    fn test_disabled_calendly_yields_no_service() {
        let service = create_scheduling_service(&config(false, "token")).unwrap();
        assert!(service.is_none());
    }

    #[test]
    fn test_enabled_calendly_yields_service() {
        let service = create_scheduling_service(&config(true, "token")).unwrap();
        assert!(service.is_some());
    }

    #[test]
    fn test_unusable_token_is_a_config_error() {
        let err = create_scheduling_service(&config(true, "bad\ntoken")).err().unwrap();
        assert!(matches!(err, BridgeError::ConfigError(_)));
    }
}

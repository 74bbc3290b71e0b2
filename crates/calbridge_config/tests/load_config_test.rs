use calbridge_config::{load_config, DEFAULT_CALENDLY_BASE_URL};
use std::env;

// Environment variables are process-wide, so every scenario lives in a
// single test to keep them from racing each other.
#[test]
fn test_load_config_from_environment() {
    for var in [
        "CALENDLY_API_TOKEN",
        "CALBRIDGE_SECRET_CALENDLY_API_TOKEN",
        "BASE_URL",
        "CALBRIDGE__SERVER__PORT",
        "PREFIX",
        "RUN_ENV",
    ] {
        env::remove_var(var);
    }

    // Without a token the process must not start.
    let err = load_config().unwrap_err();
    assert!(err.to_string().contains("CALENDLY_API_TOKEN"));

    // Legacy flat token plus defaults.
    env::set_var("CALENDLY_API_TOKEN", "legacy-token");
    let config = load_config().unwrap();
    assert_eq!(config.calendly.api_token, "legacy-token");
    assert_eq!(config.calendly.base_url, DEFAULT_CALENDLY_BASE_URL);
    assert_eq!(config.server.port, 8000);
    assert!(config.use_calendly);

    // Prefixed secret wins over the legacy name, BASE_URL and layered env apply.
    env::set_var("CALBRIDGE_SECRET_CALENDLY_API_TOKEN", "prefixed-token");
    env::set_var("BASE_URL", "http://127.0.0.1:9999");
    env::set_var("CALBRIDGE__SERVER__PORT", "8181");
    let config = load_config().unwrap();
    assert_eq!(config.calendly.api_token, "prefixed-token");
    assert_eq!(config.calendly.base_url, "http://127.0.0.1:9999");
    assert_eq!(config.server.port, 8181);

    // An empty token counts as missing.
    env::set_var("CALBRIDGE_SECRET_CALENDLY_API_TOKEN", "");
    env::set_var("CALENDLY_API_TOKEN", "  ");
    assert!(load_config().is_err());
}

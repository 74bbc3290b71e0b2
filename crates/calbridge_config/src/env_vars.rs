//! Environment variable handling for the Calendly bridge.
//!
//! Non-secret settings follow the `CALBRIDGE__SECTION__KEY` pattern and are
//! picked up by the layered config loader. Secrets are never read from config
//! files; they come from `CALBRIDGE_SECRET_SECTION_KEY` or, for backward
//! compatibility, from the flat `SECTION_KEY` name (e.g. `CALENDLY_API_TOKEN`).

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "CALBRIDGE";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "CALBRIDGE_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Flat variable that overrides `calendly.base_url`.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `server.port` becomes `CALBRIDGE__SERVER__PORT`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `calendly.api_token` becomes `CALBRIDGE_SECRET_CALENDLY_API_TOKEN`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its legacy, unprefixed variable name
///
/// `calendly.api_token` becomes `CALENDLY_API_TOKEN`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

/// Get an environment variable for a secret path
///
/// Tries the prefixed name first and falls back to the legacy name.
/// Empty values count as unset.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    let env_var = secret_path_to_env_var(path);
    if let Some(value) = non_empty_var(&env_var) {
        return Some(value);
    }

    let legacy_env_var = legacy_secret_path_to_env_var(path);
    non_empty_var(&legacy_env_var)
}

/// Read a flat override variable such as `BASE_URL`.
pub fn get_override_env_var(name: &str) -> Option<String> {
    non_empty_var(name)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

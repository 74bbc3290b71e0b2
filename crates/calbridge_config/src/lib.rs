// --- File: crates/calbridge_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Config path of the Calendly bearer token.
pub const CALENDLY_TOKEN_PATH: &str = "calendly.api_token";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, `config/default.*`,
/// `config/{RUN_ENV}.*`, `CALBRIDGE__*` environment variables, then the flat
/// `BASE_URL` and Calendly token variables. Fails when no token is set.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();
    debug!(
        "Loading config for RUN_ENV={} (env overrides like {})",
        run_env,
        env_vars::config_path_to_env_var("server.port")
    );

    let builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("use_calendly", true)?
        .set_default("calendly.base_url", DEFAULT_CALENDLY_BASE_URL)?
        .set_default("calendly.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides(raw_config).validate()
}

/// Applies the flat environment variables that take precedence over every
/// layered source.
pub fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Some(base_url) = env_vars::get_override_env_var(env_vars::BASE_URL_VAR) {
        config.calendly.base_url = base_url;
    }
    if let Some(token) = env_vars::get_secret_env_var(CALENDLY_TOKEN_PATH) {
        config.calendly.api_token = token;
    }
    config
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is taken from `DOTENV_OVERRIDE`, else from a first command line
/// argument starting with `.env`, else `.env`. Loading happens at most once;
/// a missing file is not an error. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

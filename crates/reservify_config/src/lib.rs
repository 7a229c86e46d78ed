use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod models;
pub mod registry;
#[cfg(test)]
mod models_test;

pub use models::*;
pub use registry::{
    BusinessConfig, BusinessRegistry, RegistryError, ServiceAccountCredentials, MAX_DURATION_MINUTES,
};

/// Default prefix for configuration environment variables
/// (`RESERVIFY__SERVER__HOST`, `RESERVIFY__RESERVATION__AVAILABILITY_POLICY`, ...).
pub const DEFAULT_PREFIX: &str = "RESERVIFY";

/// Loads the application configuration.
///
/// Sources, later ones win:
/// 1. `{CONFIG_DIR}/default.*` (optional, `CONFIG_DIR` defaults to `config`)
/// 2. `{CONFIG_DIR}/{RUN_ENV}.*` (optional, `RUN_ENV` defaults to `debug`)
/// 3. environment variables with the `PREFIX` prefix (default `RESERVIFY`) and `__` separator
/// 4. `PORT`, which overrides `server.port`
///
/// Every field has a serde default, so an empty configuration is valid.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
    let config_dir = PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"))
        .set_override_option("server.port", env::var("PORT").ok())?;

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment once.
///
/// `DOTENV_OVERRIDE` names an alternative file; otherwise `.env` is used.
/// A missing file is not an error. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

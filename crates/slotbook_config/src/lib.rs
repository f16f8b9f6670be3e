// --- File: crates/slotbook_config/src/lib.rs ---
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use tracing::{debug, info};

pub mod env_vars;
pub mod error;
pub mod models;

pub use error::ConfigError;
pub use models::*;

/// Directory searched for `default.*` and `{RUN_ENV}.*` files.
pub const CONFIG_DIR: &str = "config";

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// The file defaults to `.env` in the working directory. `DOTENV_OVERRIDE`
/// points at a different file. A missing file is not an error. Returns the
/// path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        if dotenv::from_filename(&dotenv_path).is_ok() {
            debug!("Loaded environment from {}", dotenv_path);
        }
    });

    dotenv_path
}

/// Loads and validates the application configuration.
///
/// Sources, lowest precedence first: struct defaults, `config/default.*`,
/// `config/{RUN_ENV}.*`, `SLOTBOOK__*` variables, then the flat legacy
/// variables (`ZOOM_API_URL`, `ZOOM_API_KEY`, `ZOOM_API_SECRET`,
/// `ZOOM_USERNAME`, `PORT`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    info!("Loading configuration for RUN_ENV={}", run_env);

    let builder = Config::builder()
        .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
        .add_source(File::with_name(&format!("{CONFIG_DIR}/{run_env}")).required(false))
        .add_source(
            Environment::with_prefix(env_vars::DEFAULT_PREFIX)
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR),
        );

    let builder = apply_overrides(builder, env_vars::legacy_overrides())?;
    build(builder)
}

fn apply_overrides(
    mut builder: ConfigBuilder<DefaultState>,
    overrides: Vec<(&'static str, String)>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (path, value) in overrides {
        debug!("Applying legacy environment override for {}", path);
        builder = builder.set_override(path, value)?;
    }
    Ok(builder)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

// --- File: crates/slotbook_config/src/error.rs ---
use thiserror::Error;

use crate::env_vars::env_var_hint;

/// Errors that stop the server from starting.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read or did not deserialize into `AppConfig`
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A mandatory value is absent or blank
    #[error("missing required configuration value `{0}` (set {hint})", hint = env_var_hint(.0))]
    Missing(&'static str),

    /// A value is present but unusable
    #[error("invalid configuration value `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

//! Environment variable handling for the Slotbook application.
//!
//! Two naming patterns are accepted. The structured one mirrors the config
//! tree (`SLOTBOOK__ZOOM__API_KEY` for `zoom.api_key`) and is picked up by the
//! `config` crate directly. The legacy one is the flat set of variables older
//! deployments export (`ZOOM_API_KEY`, `PORT`, ...); those are mapped onto
//! config paths here and applied as overrides.

use std::env;

/// The prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "SLOTBOOK";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Flat variable names and the config path each one overrides.
pub const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("ZOOM_API_URL", "zoom.api_url"),
    ("ZOOM_API_KEY", "zoom.api_key"),
    ("ZOOM_API_SECRET", "zoom.api_secret"),
    ("ZOOM_USERNAME", "zoom.username"),
    ("PORT", "server.port"),
];

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "server.host")
///
/// # Returns
///
/// The environment variable name (e.g., "SLOTBOOK__SERVER__HOST")
pub fn config_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", DEFAULT_PREFIX, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Look up the legacy variable for a config path, if one exists.
pub fn legacy_env_var_for(path: &str) -> Option<&'static str> {
    LEGACY_ENV_VARS
        .iter()
        .find(|(_, p)| *p == path)
        .map(|(var, _)| *var)
}

/// The variables that can set a config path, for error messages.
///
/// `env_var_hint("zoom.api_key")` is `SLOTBOOK__ZOOM__API_KEY or ZOOM_API_KEY`.
pub fn env_var_hint(path: &str) -> String {
    let structured = config_path_to_env_var(path);
    match legacy_env_var_for(path) {
        Some(legacy) => format!("{} or {}", structured, legacy),
        None => structured,
    }
}

/// Collect the legacy variables that are currently set, as `(config path, value)` pairs.
///
/// Empty values are skipped so a blank `PORT=` in a `.env` file does not
/// shadow the structured variable or the default.
pub fn legacy_overrides() -> Vec<(&'static str, String)> {
    collect_overrides(|var| env::var(var).ok())
}

fn collect_overrides<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    LEGACY_ENV_VARS
        .iter()
        .filter_map(|(var, path)| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (*path, value))
        })
        .collect()
}

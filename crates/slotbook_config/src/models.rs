// --- File: crates/slotbook_config/src/models.rs ---

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Token lifetime used when none is configured. Covers one outbound round trip.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60;
/// Upper bound for a single call to the provider.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_token_ttl_secs() -> u64 {
    DEFAULT_TOKEN_TTL_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

// --- General Server Config ---
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16, // PORT or SLOTBOOK__SERVER__PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// --- Zoom Config ---
// The provider credential pair plus where to find the API. All four strings are mandatory,
// `validate` reports which one is missing.
#[derive(Deserialize, Clone, PartialEq)]
pub struct ZoomConfig {
    #[serde(default)]
    pub api_url: String, // ZOOM_API_URL, e.g. https://api.zoom.us/v2
    #[serde(default)]
    pub api_key: String, // ZOOM_API_KEY, used as the `iss` claim
    #[serde(default)]
    pub api_secret: String, // ZOOM_API_SECRET, HMAC signing key
    #[serde(default)]
    pub username: String, // ZOOM_USERNAME, profile served by GET /user
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ZoomConfig {
    /// How long a minted provider token stays valid.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Bound applied to every outbound provider call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            username: String::new(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for ZoomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("username", &self.username)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

// --- CORS Config ---
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    /// Directory holding the built calendar client, served for unmatched paths.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl AppConfig {
    /// Checks everything the server needs before it may start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = &self.zoom;
        require("zoom.api_url", &zoom.api_url)?;
        require("zoom.api_key", &zoom.api_key)?;
        require("zoom.api_secret", &zoom.api_secret)?;
        require("zoom.username", &zoom.username)?;

        let url = url::Url::parse(&zoom.api_url).map_err(|e| ConfigError::Invalid {
            key: "zoom.api_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                key: "zoom.api_url",
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        if zoom.token_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "zoom.token_ttl_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if zoom.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "zoom.request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn require(key: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Missing(key))
    } else {
        Ok(())
    }
}

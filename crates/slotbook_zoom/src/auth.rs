// File: crates/slotbook_zoom/src/auth.rs
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use slotbook_config::ZoomConfig;
use std::fmt;

use crate::error::ZoomError;

/// Claims Zoom expects in a JWT app token.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub iss: String, // Zoom API key
    pub exp: i64,    // Expiration timestamp (Unix epoch seconds)
}

/// Signs short-lived bearer tokens identifying this backend to Zoom.
///
/// Holds the signing key and the token lifetime; every call to [`TokenIssuer::issue`]
/// produces a new token, nothing is cached.
#[derive(Clone)]
pub struct TokenIssuer {
    api_key: String,
    key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Builds an issuer from the key/secret pair and the token lifetime.
    ///
    /// Fails on a blank key, a blank secret or a zero lifetime. Called once at
    /// startup so a bad credential stops the server instead of failing each request.
    pub fn new(
        api_key: &str,
        api_secret: &str,
        ttl: std::time::Duration,
    ) -> Result<Self, ZoomError> {
        if api_key.trim().is_empty() {
            return Err(ZoomError::ConfigError("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(ZoomError::ConfigError("API secret is empty".to_string()));
        }
        let ttl = Duration::from_std(ttl)
            .map_err(|e| ZoomError::ConfigError(format!("token lifetime out of range: {}", e)))?;
        if ttl <= Duration::zero() {
            return Err(ZoomError::ConfigError(
                "token lifetime must be positive".to_string(),
            ));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            key: EncodingKey::from_secret(api_secret.as_bytes()),
            ttl,
        })
    }

    pub fn from_config(config: &ZoomConfig) -> Result<Self, ZoomError> {
        Self::new(&config.api_key, &config.api_secret, config.token_ttl())
    }

    /// Signs a token valid from now until now + ttl.
    pub fn issue(&self) -> Result<String, ZoomError> {
        self.issue_at(Utc::now())
    }

    /// Signs a token as if the current time were `now`.
    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<String, ZoomError> {
        let claims = self.claims_at(now);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)?;
        Ok(token)
    }

    pub fn claims_at(&self, now: DateTime<Utc>) -> Claims {
        Claims {
            iss: self.api_key.clone(),
            exp: (now + self.ttl).timestamp(),
        }
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("api_key", &self.api_key)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

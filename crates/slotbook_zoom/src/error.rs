// --- File: crates/slotbook_zoom/src/error.rs ---
use axum::response::{IntoResponse, Response};
use slotbook_common::{config_error, upstream_error, validation_error, HttpStatusCode, SlotbookError};
use thiserror::Error;

/// Name used for the provider in error messages and logs.
pub const SERVICE_NAME: &str = "Zoom API";

/// Zoom-specific error types.
#[derive(Error, Debug)]
pub enum ZoomError {
    /// Credential or endpoint settings are unusable
    #[error("Zoom configuration error: {0}")]
    ConfigError(String),

    /// The JWT could not be signed
    #[error("Failed to sign Zoom API token: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Transport failure, including connection refused
    #[error("Zoom API request failed: {0}")]
    RequestError(reqwest::Error),

    /// The call exceeded the configured request timeout
    #[error("Zoom API request timed out: {0}")]
    Timeout(reqwest::Error),

    /// Zoom answered with a non-2xx status
    #[error("Zoom API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Failed to parse Zoom API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Caller input rejected before anything was sent upstream
    #[error("{0}")]
    ValidationError(String),
}

impl From<reqwest::Error> for ZoomError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ZoomError::Timeout(err)
        } else {
            ZoomError::RequestError(err)
        }
    }
}

/// Convert ZoomError to SlotbookError
impl From<ZoomError> for SlotbookError {
    fn from(err: ZoomError) -> Self {
        match err {
            ZoomError::ConfigError(msg) => config_error(msg),
            ZoomError::TokenError(e) => {
                SlotbookError::AuthError(format!("Zoom token signing failed: {}", e))
            }
            ZoomError::RequestError(e) => {
                SlotbookError::HttpError(format!("Zoom request error: {}", e))
            }
            ZoomError::Timeout(e) => {
                SlotbookError::TimeoutError(format!("Zoom request timed out: {}", e))
            }
            ZoomError::ApiError {
                status_code,
                message,
            } => upstream_error(SERVICE_NAME, status_code, message),
            ZoomError::ParseError(e) => {
                SlotbookError::ParseError(format!("Zoom response parse error: {}", e))
            }
            ZoomError::ValidationError(msg) => validation_error(msg),
        }
    }
}

impl HttpStatusCode for ZoomError {
    fn status_code(&self) -> u16 {
        match self {
            ZoomError::ValidationError(_) => 400,
            ZoomError::ApiError { status_code, .. } if (400..600).contains(status_code) => {
                *status_code
            }
            ZoomError::ApiError { .. } => 502,
            ZoomError::Timeout(_) => 504,
            ZoomError::RequestError(_) | ZoomError::ParseError(_) => 502,
            ZoomError::ConfigError(_) | ZoomError::TokenError(_) => 500,
        }
    }
}

impl IntoResponse for ZoomError {
    fn into_response(self) -> Response {
        SlotbookError::from(self).into_response()
    }
}

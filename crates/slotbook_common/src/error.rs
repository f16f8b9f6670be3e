// --- File: crates/slotbook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for everything Slotbook returns to an HTTP caller.
///
/// Integration crates keep their own error enums and convert into this one
/// with a `From` impl, so handlers only ever render `SlotbookError`.
#[derive(Error, Debug)]
pub enum SlotbookError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The caller sent something we refuse to forward
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The upstream service answered with a non-success status
    #[error("Upstream error: {service_name} returned {status_code} - {message}")]
    UpstreamError {
        service_name: String,
        status_code: u16,
        message: String,
    },

    /// The upstream service did not answer in time
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Transport failure talking to the upstream service
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The upstream answer could not be decoded
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Credential could not be produced
    #[error("Authentication error: {0}")]
    AuthError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SlotbookError {
    fn status_code(&self) -> u16 {
        match self {
            SlotbookError::ConfigError(_) => 500,
            SlotbookError::ValidationError(_) => 400,
            // Upstream 4xx/5xx are passed through so the caller sees e.g. a 401 as a 401.
            SlotbookError::UpstreamError { status_code, .. } if (400..600).contains(status_code) => {
                *status_code
            }
            SlotbookError::UpstreamError { .. } => 502,
            SlotbookError::TimeoutError(_) => 504,
            SlotbookError::HttpError(_) => 502,
            SlotbookError::ParseError(_) => 502,
            SlotbookError::AuthError(_) => 500,
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> SlotbookError {
    SlotbookError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> SlotbookError {
    SlotbookError::ValidationError(message.to_string())
}

pub fn upstream_error<T: fmt::Display>(
    service_name: &str,
    status_code: u16,
    message: T,
) -> SlotbookError {
    SlotbookError::UpstreamError {
        service_name: service_name.to_string(),
        status_code,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_client_and_server_errors_pass_through() {
        assert_eq!(upstream_error("Zoom", 401, "Invalid access token").status_code(), 401);
        assert_eq!(upstream_error("Zoom", 404, "User not found").status_code(), 404);
        assert_eq!(upstream_error("Zoom", 500, "boom").status_code(), 500);
    }

    #[test]
    fn test_unexpected_upstream_status_becomes_bad_gateway() {
        assert_eq!(upstream_error("Zoom", 302, "redirect").status_code(), 502);
        assert_eq!(upstream_error("Zoom", 0, "none").status_code(), 502);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad").status_code(), 400);
        assert_eq!(config_error("missing").status_code(), 500);
        assert_eq!(SlotbookError::TimeoutError("slow".into()).status_code(), 504);
        assert_eq!(SlotbookError::HttpError("refused".into()).status_code(), 502);
        assert_eq!(SlotbookError::AuthError("unsigned".into()).status_code(), 500);
    }

    #[test]
    fn test_display_includes_upstream_details() {
        let err = upstream_error("Zoom", 401, "Invalid access token");
        assert_eq!(
            err.to_string(),
            "Upstream error: Zoom returned 401 - Invalid access token"
        );
    }
}

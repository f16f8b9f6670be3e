// --- File: crates/slotbook_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::error::{HttpStatusCode, SlotbookError};

// Include the client module
pub mod client;

/// Extension trait for SlotbookError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

/// The JSON body every error response carries.
pub fn error_body(message: &str, status_code: StatusCode) -> Value {
    json!({
        "error": {
            "message": message,
            "code": status_code.as_u16(),
        }
    })
}

impl IntoHttpResponse for SlotbookError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_message = self.to_string();
        if status_code.is_server_error() {
            error!(status = status_code.as_u16(), "{}", error_message);
        } else {
            warn!(status = status_code.as_u16(), "{}", error_message);
        }

        (status_code, Json(error_body(&error_message, status_code))).into_response()
    }
}

/// Implement IntoResponse for SlotbookError so handlers can return `Result<_, SlotbookError>`.
impl IntoResponse for SlotbookError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

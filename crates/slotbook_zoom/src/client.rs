//! HTTP client for the Zoom REST API.
//!
//! A `ZoomClient` is cheap to build: it borrows the shared connection pool and
//! carries one freshly signed bearer token. Build one per inbound request.

use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use crate::error::ZoomError;

/// Longest slice of an error body copied into `ZoomError::ApiError`.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Zoom API client bound to a base URL and a bearer token.
#[derive(Clone)]
pub struct ZoomClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ZoomClient {
    /// Binds `http` to `base_url` (e.g. `https://api.zoom.us/v2`) with `token` as bearer credential.
    pub fn new(http: Client, base_url: &str, token: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Absolute URL for a path such as `/users/me`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ZoomError> {
        info!(method = "GET", path, "Calling Zoom API");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ZoomError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        info!(method = "POST", path, "Calling Zoom API");
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ZoomError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = summarize_body(&bytes)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("no body").to_string());
        warn!(status = status.as_u16(), "Zoom API returned an error: {}", message);
        return Err(ZoomError::ApiError {
            status_code: status.as_u16(),
            message,
        });
    }

    debug!(status = status.as_u16(), bytes = bytes.len(), "Zoom API response received");
    Ok(serde_json::from_slice(&bytes)?)
}

fn summarize_body(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(MAX_ERROR_BODY_CHARS).collect())
}

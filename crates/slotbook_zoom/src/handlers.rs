// File: crates/slotbook_zoom/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use reqwest::Client;
use serde_json::Value;
use slotbook_common::create_client;
use slotbook_config::AppConfig;
use std::sync::Arc;
use tracing::info;

use crate::auth::TokenIssuer;
use crate::client::ZoomClient;
use crate::error::ZoomError;
use crate::logic::{create_meeting, fetch_profile, list_meetings};
use crate::models::{CreateMeetingRequest, Meeting};

/// Shared state for the Zoom handlers. Read-only after startup.
#[derive(Clone)]
pub struct ZoomState {
    pub config: Arc<AppConfig>,
    issuer: TokenIssuer,
    http: Client,
}

impl ZoomState {
    /// Builds the token issuer and the pooled HTTP client from configuration.
    ///
    /// Errors here are startup errors: a bad secret or an unusable client
    /// means the proxy cannot serve any request.
    pub fn new(config: Arc<AppConfig>) -> Result<Self, ZoomError> {
        let issuer = TokenIssuer::from_config(&config.zoom)?;
        let http = create_client(config.zoom.request_timeout())
            .map_err(|e| ZoomError::ConfigError(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            config,
            issuer,
            http,
        })
    }

    /// A client carrying a freshly signed token.
    pub fn client(&self) -> Result<ZoomClient, ZoomError> {
        let token = self.issuer.issue()?;
        Ok(ZoomClient::new(
            self.http.clone(),
            &self.config.zoom.api_url,
            token,
        ))
    }
}

/// Handler returning the configured Zoom user's profile unchanged.
#[axum::debug_handler]
pub async fn get_user_handler(
    State(state): State<Arc<ZoomState>>,
) -> Result<Json<Value>, ZoomError> {
    info!("Fetching profile of the configured Zoom user");
    let client = state.client()?;
    let profile = fetch_profile(&client, &state.config.zoom.username).await?;
    Ok(Json(profile))
}

/// Handler listing a user's meetings in the simplified schema.
#[axum::debug_handler]
pub async fn list_meetings_handler(
    State(state): State<Arc<ZoomState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Meeting>>, ZoomError> {
    let client = state.client()?;
    let meetings = list_meetings(&client, &user_id).await?;
    Ok(Json(meetings))
}

/// Handler booking a meeting.
///
/// Body rejections (bad JSON, missing or mistyped fields) are reported with
/// the same error body as validation failures.
#[axum::debug_handler]
pub async fn create_meeting_handler(
    State(state): State<Arc<ZoomState>>,
    Path(user_id): Path<String>,
    payload: Result<Json<CreateMeetingRequest>, JsonRejection>,
) -> Result<Json<Meeting>, ZoomError> {
    let Json(request) = payload.map_err(|rejection| {
        ZoomError::ValidationError(format!("invalid booking request: {}", rejection.body_text()))
    })?;

    info!(topic = %request.topic, "Booking meeting");
    let client = state.client()?;
    let meeting = create_meeting(&client, &user_id, request).await?;
    Ok(Json(meeting))
}

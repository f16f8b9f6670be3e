// --- File: crates/slotbook_zoom/src/routes.rs ---

use crate::error::ZoomError;
use crate::handlers::{
    create_meeting_handler, get_user_handler, list_meetings_handler, ZoomState,
};
use axum::{routing::get, Router};
use slotbook_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing the three proxy operations.
///
/// Fails when the Zoom credentials cannot produce a token issuer; callers treat that as fatal.
pub fn routes(config: Arc<AppConfig>) -> Result<Router, ZoomError> {
    let zoom_state = Arc::new(ZoomState::new(config)?);

    Ok(Router::new()
        .route("/user", get(get_user_handler))
        .route(
            "/{user_id}/meetings",
            get(list_meetings_handler).post(create_meeting_handler),
        )
        .with_state(zoom_state))
}

// File: services/slotbook_backend/src/lib.rs
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use slotbook_config::{AppConfig, CorsConfig};
use slotbook_zoom::{routes as zoom_routes, ZoomError};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Assembles the full application router from configuration.
pub fn build_app(config: Arc<AppConfig>) -> Result<Router, ZoomError> {
    let zoom_router = zoom_routes(config.clone())?;

    let mut app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(zoom_router);

    // Swagger UI and JSON endpoint when the openapi feature is enabled
    #[cfg(feature = "openapi")]
    {
        use slotbook_zoom::doc::ZoomApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        info!("Adding Swagger UI at /docs");
        app = app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ZoomApiDoc::openapi()));
    }

    // Built calendar client, if one is deployed alongside the proxy
    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    Ok(app
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http()))
}

/// CORS for the calendar client. An empty origin list allows any origin.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if cors.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

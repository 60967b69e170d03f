use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    document, health, language, translation::TranslationController,
};
use crate::infrastructure::auth::{credential_middleware, request_id_middleware};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(config: Arc<Config>, translation_controller: Arc<TranslationController>) -> Router {
    // Translation and extraction routes (need a credential)
    let credential_routes = Router::new()
        .route("/api/translate", post(TranslationController::translate))
        .route("/api/translate/file", post(TranslationController::translate_file))
        .route("/api/translate/audio", post(TranslationController::translate_audio))
        .with_state(translation_controller)
        .route("/api/documents/extract", post(document::extract))
        .route_layer(middleware::from_fn_with_state(
            config.clone(),
            credential_middleware,
        ));

    // Public routes
    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config.clone())
        .route("/api/languages", get(language::list_languages))
        .merge(credential_routes)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

use polyglot_backend::controllers::translation::TranslationController;
use polyglot_backend::domain::translation::TranslationService;
use polyglot_backend::infrastructure::config::{Config, LogFormat};
use polyglot_backend::infrastructure::http::{build_router, start_http_server};
use polyglot_backend::infrastructure::repositories::{
    GeminiTranslationRepository, GoogleTtsRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Polyglot Backend on {}:{}",
        config.host,
        config.port
    );

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set. Every request must send its own x-api-key header");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (backend clients)
    tracing::info!(
        model = %config.gemini_model,
        gemini_base_url = %config.gemini_base_url,
        tts_base_url = %config.tts_base_url,
        "Instantiating repositories..."
    );
    let translation_repo = Arc::new(GeminiTranslationRepository::new(
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
    ));
    let tts_repo = Arc::new(GoogleTtsRepository::new(config.tts_base_url.clone()));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(translation_repo, tts_repo));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let translation_controller = Arc::new(TranslationController::new(translation_service));

    // Start HTTP server with all routes
    let app = build_router(config.clone(), translation_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "polyglot_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

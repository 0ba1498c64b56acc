use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use polyvox::infrastructure::config::{Config, LogFormat};
use polyvox::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Polyvox on {}:{}",
        config.host,
        config.port
    );

    // One pooled HTTP client shared by both Azure backends
    let http_client = reqwest::Client::new();

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate backend clients (inject http client and config)
    tracing::info!("Instantiating backend clients...");
    let speech_client = Arc::new(polyvox::infrastructure::clients::AzureSpeechClient::new(
        http_client.clone(),
        &config,
    ));
    let sentiment_client = Arc::new(polyvox::infrastructure::clients::AzureSentimentClient::new(
        http_client,
        &config,
    ));

    // 2. Instantiate the voice catalog
    let catalog = Arc::new(polyvox::domain::catalog::VoiceCatalog::new());

    // 3. Instantiate services (inject catalog and clients)
    tracing::info!("Instantiating services...");
    let speech_service = Arc::new(polyvox::domain::speech::SpeechService::new(
        catalog.clone(),
        speech_client,
    ));
    let sentiment_service = Arc::new(polyvox::domain::sentiment::SentimentService::new(
        sentiment_client,
    ));

    // 4. Instantiate the template engine and controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let templates = polyvox::views::TemplateEngine::new(catalog.clone())?;
    let page_controller = Arc::new(polyvox::controllers::pages::PageController::new(
        catalog.clone(),
        speech_service.clone(),
        sentiment_service.clone(),
        templates,
    ));
    let catalog_controller = Arc::new(polyvox::controllers::catalog::CatalogController::new(
        catalog.clone(),
    ));
    let speech_controller = Arc::new(polyvox::controllers::speech::SpeechController::new(
        speech_service,
    ));
    let sentiment_controller = Arc::new(polyvox::controllers::sentiment::SentimentController::new(
        sentiment_service,
    ));

    // Start HTTP server with all routes
    start_http_server(
        config,
        page_controller,
        catalog_controller,
        speech_controller,
        sentiment_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "polyvox=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "polyvox=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

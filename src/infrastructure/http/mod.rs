use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infrastructure::config::Config;
use crate::{
    controllers::{
        catalog::CatalogController, health, pages::PageController,
        sentiment::SentimentController, speech::SpeechController,
    },
    infrastructure::request_id::request_id_middleware,
};

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    page_controller: Arc<PageController>,
    catalog_controller: Arc<CatalogController>,
    speech_controller: Arc<SpeechController>,
    sentiment_controller: Arc<SentimentController>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Page routes (server-rendered HTML)
    let page_routes = Router::new()
        .route("/", get(PageController::home))
        .route(
            "/pages/:slug",
            get(PageController::show).post(PageController::submit),
        )
        .with_state(page_controller.clone());

    // Catalog routes (public JSON API)
    let catalog_routes = Router::new()
        .route("/api/languages", get(CatalogController::list_languages))
        .with_state(catalog_controller.clone())
        .layer(CorsLayer::permissive());

    // Speech routes
    let speech_routes = Router::new()
        .route(
            "/api/speech/synthesize",
            axum::routing::post(SpeechController::synthesize),
        )
        .with_state(speech_controller.clone())
        .layer(CorsLayer::permissive());

    // Sentiment routes
    let sentiment_routes = Router::new()
        .route(
            "/api/sentiment/analyze",
            axum::routing::post(SentimentController::analyze),
        )
        .with_state(sentiment_controller.clone())
        .layer(CorsLayer::permissive());

    // Build application routes
    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(page_routes)
        .merge(catalog_routes)
        .merge(speech_routes)
        .merge(sentiment_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

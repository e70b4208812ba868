mod analysis;
mod config;
mod errors;
mod llm;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm::{CompletionModel, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion model if a credential is present. A missing
    // key disables the analyzer endpoint but keeps the service up.
    let model: Option<Arc<dyn CompletionModel>> = match &config.gemini_api_key {
        Some(key) => {
            info!("Gemini client initialized");
            Some(Arc::new(GeminiClient::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY not set — /api/analyze-job will answer NOT_CONFIGURED");
            None
        }
    };

    let state = AppState { model };

    // The site frontend is served from a separate origin, so CORS stays open.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

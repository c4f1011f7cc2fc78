mod backends;
mod config;
mod content;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backends::{KeywordSeoAnalyzer, LlmGenerator, LlmOptimizer};
use crate::config::Config;
use crate::content::pipeline::ContentService;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting content generation service v{}", env!("CARGO_PKG_VERSION"));

    // One LLM client shared by the generation and optimization backends
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let service = ContentService::new(
        Arc::new(LlmGenerator::new(llm.clone())),
        Arc::new(LlmOptimizer::new(llm)),
        Arc::new(KeywordSeoAnalyzer),
    )
    .with_batch_concurrency(config.batch_concurrency);
    info!(
        "Content pipeline ready (batch concurrency {}, max batch size {})",
        config.batch_concurrency, config.max_batch_size
    );

    let state = AppState {
        service,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

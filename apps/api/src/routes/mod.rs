pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content API
        .route("/api/v1/content/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/content/batch-generate",
            post(handlers::handle_batch_generate),
        )
        .route(
            "/api/v1/content/analyze-quality",
            post(handlers::handle_analyze_quality),
        )
        .route("/api/v1/content/variations", post(handlers::handle_variations))
        .route("/api/v1/content/optimize", post(handlers::handle_optimize))
        .route(
            "/api/v1/content/analyze-seo",
            post(handlers::handle_analyze_seo),
        )
        .route("/api/v1/content/templates", get(handlers::handle_list_templates))
        .route(
            "/api/v1/content/templates/:template_id",
            get(handlers::handle_get_template),
        )
        .with_state(state)
}

use crate::config::Config;
use crate::content::pipeline::ContentService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Content pipeline with its injected generation, optimization and SEO backends.
    pub service: ContentService,
    pub config: Config,
}

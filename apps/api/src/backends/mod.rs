//! Backend capabilities — the generation, optimization and SEO engines the
//! content pipeline drives.
//!
//! Each capability is an async trait carried as `Arc<dyn ...>` and injected into
//! `ContentService` at startup, so tests and alternative deployments can swap
//! implementations without touching the pipeline.
//!
//! Default implementations:
//! - `LlmGenerator` (generator.rs): drafts and variations via Claude.
//! - `LlmOptimizer` (optimizer.rs): rewrites via Claude, readability measured locally.
//! - `KeywordSeoAnalyzer` (seo.rs): pure-Rust, deterministic SEO scoring.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::models::GenerationRequest;

pub mod generator;
pub mod optimizer;
pub mod prompts;
pub mod readability;
pub mod seo;

pub use generator::LlmGenerator;
pub use optimizer::LlmOptimizer;
pub use seo::KeywordSeoAnalyzer;

/// A capability failed or returned something unusable. Never recovered inside
/// the pipeline: there is no fallback content source.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("generation backend failed: {0}")]
    Generation(String),

    #[error("optimization backend failed: {0}")]
    Optimization(String),

    /// The bundled `KeywordSeoAnalyzer` is infallible; remote analyzers use this.
    #[allow(dead_code)]
    #[error("SEO backend failed: {0}")]
    Seo(String),
}

impl BackendError {
    /// Short name of the capability that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            BackendError::Generation(_) => "generation",
            BackendError::Optimization(_) => "optimization",
            BackendError::Seo(_) => "SEO",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Capability outputs
// ────────────────────────────────────────────────────────────────────────────

/// Provenance reported by the generation backend alongside the draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationDetails {
    pub model: String,
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
    #[serde(default)]
    pub word_count: usize,
}

/// `{content, metadata}` as produced by the generation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub content: String,
    pub metadata: GenerationDetails,
}

/// One rewrite of an existing piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentVariation {
    pub content: String,
    pub variation_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Metrics the optimizer is asked to steer toward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetMetrics {
    pub readability_score: f64,
    pub engagement_score: f64,
    pub clarity_score: f64,
}

/// Optimizer output. A missing `optimized_content` means "no change
/// recommended", not failure. Every score is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizationReport {
    #[serde(default)]
    pub optimized_content: Option<String>,
    #[serde(default)]
    pub optimization_type: String,
    #[serde(default)]
    pub readability_score: Option<f64>,
    #[serde(default)]
    pub engagement_score: Option<f64>,
    #[serde(default)]
    pub clarity_score: Option<f64>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

impl OptimizationReport {
    /// The rewritten text, if the optimizer produced a non-blank one.
    pub fn rewritten(&self) -> Option<&str> {
        self.optimized_content
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Standalone readability measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub avg_sentence_length: Option<f64>,
    #[serde(default)]
    pub grade_level: Option<f64>,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub sentence_count: usize,
}

/// SEO sub-scores. Absent values are `None`, which downstream scoring treats as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub keyword_density: Option<f64>,
    #[serde(default)]
    pub meta_description_score: Option<f64>,
    #[serde(default)]
    pub heading_structure_score: Option<f64>,
    #[serde(default)]
    pub keyword_counts: BTreeMap<String, usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Capability traits
// ────────────────────────────────────────────────────────────────────────────

/// Produces drafts from request parameters. Must return an error rather than
/// empty content when it cannot generate.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, BackendError>;

    async fn generate_variations(
        &self,
        content: &str,
        num_variations: usize,
        variation_type: &str,
    ) -> Result<Vec<ContentVariation>, BackendError>;
}

#[async_trait]
pub trait OptimizationBackend: Send + Sync {
    async fn optimize(
        &self,
        content: &str,
        optimization_type: &str,
        targets: &TargetMetrics,
    ) -> Result<OptimizationReport, BackendError>;

    async fn analyze_readability(&self, content: &str) -> Result<ReadabilityReport, BackendError>;
}

#[async_trait]
pub trait SeoBackend: Send + Sync {
    async fn analyze(
        &self,
        content: &str,
        target_keywords: &[String],
    ) -> Result<SeoReport, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewritten_ignores_blank_output() {
        let report = OptimizationReport {
            optimized_content: Some("   \n".to_string()),
            ..Default::default()
        };
        assert_eq!(report.rewritten(), None);
    }

    #[test]
    fn test_seo_report_tolerates_missing_fields() {
        let report: SeoReport = serde_json::from_str(r#"{"overall_score": 55.0}"#).unwrap();
        assert_eq!(report.overall_score, Some(55.0));
        assert_eq!(report.meta_description_score, None);
        assert!(report.keyword_counts.is_empty());
    }

    #[test]
    fn test_backend_error_stage_names() {
        assert_eq!(BackendError::Generation("x".into()).stage(), "generation");
        assert_eq!(BackendError::Optimization("x".into()).stage(), "optimization");
        assert_eq!(BackendError::Seo("x".into()).stage(), "SEO");
    }
}

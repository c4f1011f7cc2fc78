//! Content pipeline — drives the three backends for one request.
//!
//! Flow: generate → optimize (optional) → SEO analysis (optional) → stamp metadata.
//!
//! SEO runs after optimization so the report describes the text the caller
//! actually receives. A generation failure aborts the run: there is nothing
//! to optimize or score.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::backends::{
    BackendError, ContentVariation, GenerationBackend, OptimizationBackend, OptimizationReport,
    SeoBackend, SeoReport, TargetMetrics,
};
use crate::content::models::{ContentResult, GenerationMetadata, GenerationRequest, SERVICE_VERSION};

/// House style the pipeline optimizes toward when the caller does not choose.
pub const HOUSE_STYLE_TARGETS: TargetMetrics = TargetMetrics {
    readability_score: 70.0,
    engagement_score: 80.0,
    clarity_score: 75.0,
};

/// Optimization pass name used by the pipeline.
pub const PIPELINE_OPTIMIZATION_TYPE: &str = "general";

/// Holds the injected backends. Cheap to clone; carries no per-request state.
#[derive(Clone)]
pub struct ContentService {
    pub(crate) generator: Arc<dyn GenerationBackend>,
    pub(crate) optimizer: Arc<dyn OptimizationBackend>,
    pub(crate) seo: Arc<dyn SeoBackend>,
    pub(crate) targets: TargetMetrics,
    pub(crate) batch_concurrency: usize,
}

impl ContentService {
    pub fn new(
        generator: Arc<dyn GenerationBackend>,
        optimizer: Arc<dyn OptimizationBackend>,
        seo: Arc<dyn SeoBackend>,
    ) -> Self {
        Self {
            generator,
            optimizer,
            seo,
            targets: HOUSE_STYLE_TARGETS,
            batch_concurrency: 1,
        }
    }

    /// Overrides the optimization targets used by `generate_content`.
    #[cfg(test)]
    pub fn with_targets(mut self, targets: TargetMetrics) -> Self {
        self.targets = targets;
        self
    }

    /// Number of batch items processed concurrently (minimum 1).
    pub fn with_batch_concurrency(mut self, batch_concurrency: usize) -> Self {
        self.batch_concurrency = batch_concurrency.max(1);
        self
    }

    /// Runs the full pipeline for one request.
    pub async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<ContentResult, BackendError> {
        // Step 1: draft
        info!(
            "Generating {} content (tone={}, length={}, keywords={})",
            request.content_type,
            request.tone,
            request.length,
            request.keywords.len()
        );
        let generated = self.generator.generate(request).await?;
        let mut content = generated.content;

        // Step 2: optimize toward the house style
        let mut optimization = None;
        if request.optimize {
            let report = self
                .optimizer
                .optimize(&content, PIPELINE_OPTIMIZATION_TYPE, &self.targets)
                .await?;
            if let Some(rewritten) = report.rewritten().map(str::to_string) {
                info!(
                    "Optimizer rewrote content (readability={:?})",
                    report.readability_score
                );
                content = rewritten;
                optimization = Some(report);
            } else {
                warn!("Optimizer returned no optimized content; keeping draft");
            }
        } else {
            debug!("Optimization skipped by request");
        }

        // Step 3: SEO on the final text
        let mut seo_analysis = None;
        if request.analyze_seo {
            let report = self.seo.analyze(&content, &request.keywords).await?;
            info!("SEO analysis complete (overall={:?})", report.overall_score);
            seo_analysis = Some(report);
        } else {
            debug!("SEO analysis skipped by request");
        }

        // Step 4: provenance
        Ok(ContentResult {
            content,
            metadata: generated.metadata,
            optimization,
            seo_analysis,
            generation_metadata: GenerationMetadata {
                generated_at: Utc::now(),
                service_version: SERVICE_VERSION.to_string(),
                optimization_applied: request.optimize,
                seo_analysis_applied: request.analyze_seo,
            },
        })
    }

    /// Rewrites existing content into `num_variations` alternatives.
    pub async fn generate_content_variations(
        &self,
        content: &str,
        num_variations: usize,
        variation_type: &str,
    ) -> Result<Vec<ContentVariation>, BackendError> {
        info!("Generating {num_variations} {variation_type} variations");
        self.generator
            .generate_variations(content, num_variations, variation_type)
            .await
    }

    /// Direct optimizer call with caller-chosen targets.
    pub async fn optimize_content(
        &self,
        content: &str,
        optimization_type: &str,
        targets: &TargetMetrics,
    ) -> Result<OptimizationReport, BackendError> {
        self.optimizer
            .optimize(content, optimization_type, targets)
            .await
    }

    /// Direct SEO analyzer call.
    pub async fn analyze_seo(
        &self,
        content: &str,
        target_keywords: &[String],
    ) -> Result<SeoReport, BackendError> {
        self.seo.analyze(content, target_keywords).await
    }
}

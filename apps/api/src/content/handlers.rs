//! Axum route handlers for the Content API.
//!
//! Handlers own boundary validation (mandatory fields, batch shape, size
//! limits). Everything past validation is delegated to `ContentService`.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backends::{ContentVariation, OptimizationReport, SeoReport, TargetMetrics};
use crate::content::models::{BatchItem, ContentResult, GenerationRequest, QualityAssessment};
use crate::content::pipeline::HOUSE_STYLE_TARGETS;
use crate::content::templates::{self, ContentTemplate, ALL_TYPES};
use crate::errors::AppError;
use crate::state::AppState;

const MAX_VARIATIONS: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchGenerateRequest {
    pub requests: Vec<GenerationRequest>,
}

#[derive(Debug, Serialize)]
pub struct BatchGenerateResponse {
    pub batch_id: Uuid,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub items: Vec<BatchItem>,
}

fn default_content_type() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
pub struct QualityRequest {
    pub content: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn default_num_variations() -> usize {
    3
}

fn default_variation_type() -> String {
    "tone".to_string()
}

#[derive(Debug, Deserialize)]
pub struct VariationsRequest {
    pub content: String,
    #[serde(default = "default_num_variations")]
    pub num_variations: usize,
    #[serde(default = "default_variation_type")]
    pub variation_type: String,
}

#[derive(Debug, Serialize)]
pub struct VariationsResponse {
    pub variations: Vec<ContentVariation>,
}

fn default_optimization_type() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub content: String,
    #[serde(default = "default_optimization_type", rename = "type", alias = "optimization_type")]
    pub optimization_type: String,
    #[serde(default)]
    pub target_metrics: Option<TargetMetrics>,
}

#[derive(Debug, Deserialize)]
pub struct SeoRequest {
    pub content: String,
    #[serde(default)]
    pub target_keywords: Vec<String>,
}

fn default_template_type() -> String {
    ALL_TYPES.to_string()
}

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    #[serde(default = "default_template_type", rename = "type")]
    pub content_type: String,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<&'static ContentTemplate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/content/generate
///
/// Full pipeline: generate → optimize → SEO analysis.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<ContentResult>, AppError> {
    request.validate()?;
    let result = state.service.generate_content(&request).await?;
    Ok(Json(result))
}

/// POST /api/v1/content/batch-generate
///
/// Runs the pipeline per request. Individual failures are reported inside
/// `items`; the call itself only fails on an invalid batch.
pub async fn handle_batch_generate(
    State(state): State<AppState>,
    Json(batch): Json<BatchGenerateRequest>,
) -> Result<Json<BatchGenerateResponse>, AppError> {
    validate_batch(&batch.requests, state.config.max_batch_size)?;

    let batch_id = Uuid::new_v4();
    tracing::info!("Batch {batch_id}: {} requests", batch.requests.len());

    let items = state.service.generate_content_batch(&batch.requests).await;
    let succeeded = items.iter().filter(|item| item.success).count();

    Ok(Json(BatchGenerateResponse {
        batch_id,
        total: items.len(),
        succeeded,
        failed: items.len() - succeeded,
        items,
    }))
}

/// POST /api/v1/content/analyze-quality
pub async fn handle_analyze_quality(
    State(state): State<AppState>,
    Json(request): Json<QualityRequest>,
) -> Result<Json<QualityAssessment>, AppError> {
    require_content(&request.content)?;
    let assessment = state
        .service
        .analyze_content_quality(&request.content, &request.content_type, &request.keywords)
        .await?;
    Ok(Json(assessment))
}

/// POST /api/v1/content/variations
pub async fn handle_variations(
    State(state): State<AppState>,
    Json(request): Json<VariationsRequest>,
) -> Result<Json<VariationsResponse>, AppError> {
    require_content(&request.content)?;
    if !(1..=MAX_VARIATIONS).contains(&request.num_variations) {
        return Err(AppError::Validation(format!(
            "num_variations must be between 1 and {MAX_VARIATIONS}"
        )));
    }

    let variations = state
        .service
        .generate_content_variations(
            &request.content,
            request.num_variations,
            &request.variation_type,
        )
        .await?;
    Ok(Json(VariationsResponse { variations }))
}

/// POST /api/v1/content/optimize
///
/// Caller-chosen targets; falls back to the house style when omitted.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizationReport>, AppError> {
    require_content(&request.content)?;
    let targets = request.target_metrics.unwrap_or(HOUSE_STYLE_TARGETS);
    let report = state
        .service
        .optimize_content(&request.content, &request.optimization_type, &targets)
        .await?;
    Ok(Json(report))
}

/// POST /api/v1/content/analyze-seo
pub async fn handle_analyze_seo(
    State(state): State<AppState>,
    Json(request): Json<SeoRequest>,
) -> Result<Json<SeoReport>, AppError> {
    require_content(&request.content)?;
    let report = state
        .service
        .analyze_seo(&request.content, &request.target_keywords)
        .await?;
    Ok(Json(report))
}

/// GET /api/v1/content/templates?type=<content_type|all>
pub async fn handle_list_templates(
    Query(query): Query<TemplateQuery>,
) -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: templates::templates_for(&query.content_type),
    })
}

/// GET /api/v1/content/templates/:template_id
pub async fn handle_get_template(
    Path(template_id): Path<String>,
) -> Result<Json<&'static ContentTemplate>, AppError> {
    templates::find_template(&template_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Template not found".to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn require_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_batch(requests: &[GenerationRequest], max_batch_size: usize) -> Result<(), AppError> {
    if requests.is_empty() {
        return Err(AppError::Validation(
            "requests must be a non-empty list".to_string(),
        ));
    }
    if requests.len() > max_batch_size {
        return Err(AppError::Validation(format!(
            "batch of {} requests exceeds the limit of {max_batch_size}",
            requests.len()
        )));
    }
    for (index, request) in requests.iter().enumerate() {
        request.validate().map_err(|e| match e {
            AppError::Validation(msg) => AppError::Validation(format!("requests[{index}]: {msg}")),
            other => other,
        })?;
    }
    Ok(())
}

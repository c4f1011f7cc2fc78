//! Request and result types shared by the single-request and batch entry points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backends::{GenerationDetails, OptimizationReport, ReadabilityReport, SeoReport};
use crate::errors::AppError;

/// Version stamped into every `GenerationMetadata`.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn default_audience() -> String {
    "general".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

/// One content request. The same shape is used by `/generate` and by every
/// element of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub content_type: String,
    pub tone: String,
    pub length: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_audience")]
    pub target_audience: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_true")]
    pub optimize: bool,
    #[serde(default = "default_true")]
    pub analyze_seo: bool,
}

impl GenerationRequest {
    /// Builds a request with the mandatory fields set and everything else defaulted.
    #[cfg(test)]
    pub fn new(
        prompt: impl Into<String>,
        content_type: impl Into<String>,
        tone: impl Into<String>,
        length: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            content_type: content_type.into(),
            tone: tone.into(),
            length: length.into(),
            keywords: Vec::new(),
            target_audience: default_audience(),
            language: default_language(),
            optimize: true,
            analyze_seo: true,
        }
    }

    /// Rejects requests whose mandatory fields are blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let mandatory = [
            ("prompt", &self.prompt),
            ("content_type", &self.content_type),
            ("tone", &self.tone),
            ("length", &self.length),
        ];

        match mandatory.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(AppError::Validation(format!(
                "Missing required field: {field}"
            ))),
            None => Ok(()),
        }
    }
}

/// Provenance attached to every pipeline result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub generated_at: DateTime<Utc>,
    pub service_version: String,
    pub optimization_applied: bool,
    pub seo_analysis_applied: bool,
}

/// Output of one pipeline run. `content` holds the optimized text when the
/// optimizer produced one, otherwise the raw draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResult {
    pub content: String,
    pub metadata: GenerationDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_analysis: Option<SeoReport>,
    pub generation_metadata: GenerationMetadata,
}

/// Weighted quality verdict for a piece of content. Recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct QualityAssessment {
    pub quality_score: f64,
    pub readability: ReadabilityReport,
    pub seo_analysis: SeoReport,
    pub recommendations: Vec<String>,
}

/// One slot of a batch run. `request_index` is the position of the request in
/// the input list.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ContentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub request_index: usize,
}

impl BatchItem {
    pub fn succeeded(request_index: usize, data: ContentResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            request_index,
        }
    }

    pub fn failed(request_index: usize, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            request_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_applied_on_deserialize() {
        let request: GenerationRequest = serde_json::from_value(json!({
            "prompt": "write about cats",
            "content_type": "blog",
            "tone": "casual",
            "length": "short"
        }))
        .unwrap();

        assert!(request.keywords.is_empty());
        assert_eq!(request.target_audience, "general");
        assert_eq!(request.language, "en");
        assert!(request.optimize);
        assert!(request.analyze_seo);
    }

    #[test]
    fn test_request_missing_mandatory_field_fails_deserialize() {
        let result: Result<GenerationRequest, _> = serde_json::from_value(json!({
            "prompt": "write about cats",
            "content_type": "blog",
            "tone": "casual"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_names_first_blank_field() {
        let request = GenerationRequest::new("write about cats", "blog", "  ", "");
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("tone"), "got {err}");
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(GenerationRequest::new("p", "social", "casual", "short")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_failed_batch_item_serializes_without_data() {
        let item = BatchItem::failed(1, "generation backend failed: timeout");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["request_index"], json!(1));
        assert!(value.get("data").is_none());
        assert_eq!(value["error"], json!("generation backend failed: timeout"));
    }
}

//! Recording stub backends for pipeline, batch and handler tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::backends::{
    BackendError, ContentVariation, GeneratedContent, GenerationBackend, GenerationDetails,
    OptimizationBackend, OptimizationReport, ReadabilityReport, SeoBackend, SeoReport,
    TargetMetrics,
};
use crate::content::models::GenerationRequest;
use crate::content::pipeline::ContentService;

/// One observed backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Generate {
        prompt: String,
    },
    Variations {
        num_variations: usize,
    },
    Optimize {
        content: String,
        optimization_type: String,
        targets: TargetMetrics,
    },
    Readability,
    Seo {
        content: String,
        keywords: Vec<String>,
    },
}

impl Call {
    fn name(&self) -> &'static str {
        match self {
            Call::Generate { .. } => "generate",
            Call::Variations { .. } => "variations",
            Call::Optimize { .. } => "optimize",
            Call::Readability => "readability",
            Call::Seo { .. } => "seo",
        }
    }
}

type CallLog = Arc<Mutex<Vec<Call>>>;

/// Scripted behaviour:
/// - a prompt containing "fail" makes generation fail
/// - a prompt starting with "slow" delays generation by 50ms
#[derive(Clone)]
pub struct StubBackends {
    log: CallLog,
    optimizer_declines: bool,
    optimizer_fails: bool,
    seo_fails: bool,
    seo_report: SeoReport,
    readability: ReadabilityReport,
}

impl StubBackends {
    pub fn new() -> Self {
        Self {
            log: Arc::default(),
            optimizer_declines: false,
            optimizer_fails: false,
            seo_fails: false,
            seo_report: SeoReport {
                overall_score: Some(80.0),
                keyword_density: Some(2.0),
                meta_description_score: Some(80.0),
                heading_structure_score: Some(80.0),
                ..Default::default()
            },
            readability: ReadabilityReport {
                score: Some(75.0),
                avg_sentence_length: Some(12.0),
                ..Default::default()
            },
        }
    }

    pub fn optimizer_declines(mut self) -> Self {
        self.optimizer_declines = true;
        self
    }

    pub fn failing_optimizer(mut self) -> Self {
        self.optimizer_fails = true;
        self
    }

    pub fn failing_seo(mut self) -> Self {
        self.seo_fails = true;
        self
    }

    pub fn with_seo(mut self, report: SeoReport) -> Self {
        self.seo_report = report;
        self
    }

    pub fn with_readability(mut self, report: ReadabilityReport) -> Self {
        self.readability = report;
        self
    }

    pub fn service(&self) -> ContentService {
        let stub = Arc::new(self.clone());
        ContentService::new(stub.clone(), stub.clone(), stub)
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.recorded().iter().map(Call::name).collect()
    }

    fn record(&self, call: Call) {
        self.log.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GenerationBackend for StubBackends {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, BackendError> {
        self.record(Call::Generate {
            prompt: request.prompt.clone(),
        });

        if request.prompt.starts_with("slow") {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        if request.prompt.contains("fail") {
            return Err(BackendError::Generation(format!(
                "stub refused prompt '{}'",
                request.prompt
            )));
        }

        let content = format!("Draft: {}", request.prompt);
        Ok(GeneratedContent {
            metadata: GenerationDetails {
                model: "stub".to_string(),
                word_count: content.split_whitespace().count(),
                ..Default::default()
            },
            content,
        })
    }

    async fn generate_variations(
        &self,
        content: &str,
        num_variations: usize,
        variation_type: &str,
    ) -> Result<Vec<ContentVariation>, BackendError> {
        self.record(Call::Variations { num_variations });
        Ok((1..=num_variations)
            .map(|i| ContentVariation {
                content: format!("{content} (v{i})"),
                variation_type: variation_type.to_string(),
                description: None,
            })
            .collect())
    }
}

#[async_trait]
impl OptimizationBackend for StubBackends {
    async fn optimize(
        &self,
        content: &str,
        optimization_type: &str,
        targets: &TargetMetrics,
    ) -> Result<OptimizationReport, BackendError> {
        self.record(Call::Optimize {
            content: content.to_string(),
            optimization_type: optimization_type.to_string(),
            targets: *targets,
        });

        if self.optimizer_fails {
            return Err(BackendError::Optimization("stub optimizer down".to_string()));
        }

        let optimized_content =
            (!self.optimizer_declines).then(|| format!("Optimized: {content}"));
        Ok(OptimizationReport {
            optimized_content,
            optimization_type: optimization_type.to_string(),
            readability_score: Some(72.0),
            ..Default::default()
        })
    }

    async fn analyze_readability(&self, _content: &str) -> Result<ReadabilityReport, BackendError> {
        self.record(Call::Readability);
        Ok(self.readability.clone())
    }
}

#[async_trait]
impl SeoBackend for StubBackends {
    async fn analyze(
        &self,
        content: &str,
        target_keywords: &[String],
    ) -> Result<SeoReport, BackendError> {
        self.record(Call::Seo {
            content: content.to_string(),
            keywords: target_keywords.to_vec(),
        });

        if self.seo_fails {
            return Err(BackendError::Seo("stub analyzer down".to_string()));
        }
        Ok(self.seo_report.clone())
    }
}

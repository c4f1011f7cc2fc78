//! Claude-backed optimization backend. The LLM rewrites; readability of the
//! result is measured locally so the reported score is reproducible.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::backends::prompts::{OPTIMIZATION_PROMPT_TEMPLATE, OPTIMIZATION_SYSTEM};
use crate::backends::{
    readability, BackendError, OptimizationBackend, OptimizationReport, ReadabilityReport,
    TargetMetrics,
};
use crate::llm_client::LlmClient;

/// Raw JSON answer expected from the rewrite prompt.
#[derive(Debug, Deserialize)]
struct RewriteAnswer {
    optimized_content: Option<String>,
    #[serde(default)]
    improvements: Vec<String>,
    engagement_score: Option<f64>,
    clarity_score: Option<f64>,
}

pub struct LlmOptimizer {
    llm: LlmClient,
}

impl LlmOptimizer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl OptimizationBackend for LlmOptimizer {
    async fn optimize(
        &self,
        content: &str,
        optimization_type: &str,
        targets: &TargetMetrics,
    ) -> Result<OptimizationReport, BackendError> {
        let prompt = OPTIMIZATION_PROMPT_TEMPLATE
            .replace("{optimization_type}", optimization_type)
            .replace("{readability_score}", &targets.readability_score.to_string())
            .replace("{engagement_score}", &targets.engagement_score.to_string())
            .replace("{clarity_score}", &targets.clarity_score.to_string())
            .replace("{content}", content);

        let answer: RewriteAnswer = self
            .llm
            .call_json(&prompt, OPTIMIZATION_SYSTEM)
            .await
            .map_err(|e| BackendError::Optimization(e.to_string()))?;

        Ok(build_report(content, optimization_type, answer))
    }

    async fn analyze_readability(&self, content: &str) -> Result<ReadabilityReport, BackendError> {
        Ok(readability::analyze(content))
    }
}

/// Turns the model's answer into a report. A blank or unchanged rewrite is
/// reported as "no optimized content".
fn build_report(original: &str, optimization_type: &str, answer: RewriteAnswer) -> OptimizationReport {
    let optimized_content = answer
        .optimized_content
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty() && text != original.trim());

    if optimized_content.is_none() {
        debug!("Optimizer left content unchanged");
    }

    let readability_score = optimized_content
        .as_deref()
        .and_then(|text| readability::analyze(text).score);

    OptimizationReport {
        optimized_content,
        optimization_type: optimization_type.to_string(),
        readability_score,
        engagement_score: answer.engagement_score.map(|s| s.clamp(0.0, 100.0)),
        clarity_score: answer.clarity_score.map(|s| s.clamp(0.0, 100.0)),
        improvements: answer.improvements,
    }
}

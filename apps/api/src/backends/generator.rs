//! Claude-backed generation backend.

use async_trait::async_trait;
use tracing::info;

use crate::backends::prompts::{
    length_hint, GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM, VARIATIONS_PROMPT_TEMPLATE,
};
use crate::backends::{
    BackendError, ContentVariation, GeneratedContent, GenerationBackend, GenerationDetails,
};
use crate::content::models::GenerationRequest;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PLAIN_OUTPUT_INSTRUCTION};
use crate::llm_client::{LlmClient, MODEL};

pub struct LlmGenerator {
    llm: LlmClient,
}

impl LlmGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl GenerationBackend for LlmGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, BackendError> {
        let prompt = build_generation_prompt(request);

        let (content, usage) = self
            .llm
            .complete(&prompt, GENERATION_SYSTEM)
            .await
            .map_err(|e| BackendError::Generation(e.to_string()))?;

        let word_count = content.split_whitespace().count();
        info!(
            "Generated {} words of {} content ({} output tokens)",
            word_count, request.content_type, usage.output_tokens
        );

        Ok(GeneratedContent {
            content,
            metadata: GenerationDetails {
                model: MODEL.to_string(),
                input_tokens: usage.input_tokens,
                output_tokens: usage.output_tokens,
                word_count,
            },
        })
    }

    async fn generate_variations(
        &self,
        content: &str,
        num_variations: usize,
        variation_type: &str,
    ) -> Result<Vec<ContentVariation>, BackendError> {
        let prompt = VARIATIONS_PROMPT_TEMPLATE
            .replace("{num_variations}", &num_variations.to_string())
            .replace("{variation_type}", variation_type)
            .replace("{content}", content);

        let mut variations: Vec<ContentVariation> = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| BackendError::Generation(format!("Variation LLM call failed: {e}")))?;

        variations.retain(|v| !v.content.trim().is_empty());
        variations.truncate(num_variations);

        if variations.is_empty() {
            return Err(BackendError::Generation(
                "LLM returned no usable variations".to_string(),
            ));
        }

        Ok(variations)
    }
}

/// Fills the generation template with every request parameter.
fn build_generation_prompt(request: &GenerationRequest) -> String {
    let keywords = if request.keywords.is_empty() {
        "none".to_string()
    } else {
        request.keywords.join(", ")
    };

    GENERATION_PROMPT_TEMPLATE
        .replace("{content_type}", &request.content_type)
        .replace("{tone}", &request.tone)
        .replace("{length_hint}", length_hint(&request.length))
        .replace("{length}", &request.length)
        .replace("{target_audience}", &request.target_audience)
        .replace("{language}", &request.language)
        .replace("{keywords}", &keywords)
        .replace("{plain_output_instruction}", PLAIN_OUTPUT_INSTRUCTION)
        // the brief goes last so user text is never scanned for placeholders
        .replace("{prompt}", &request.prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_every_parameter() {
        let mut request = GenerationRequest::new("write about cats", "blog", "casual", "short");
        request.keywords = vec!["cats".to_string(), "kittens".to_string()];
        request.target_audience = "pet owners".to_string();
        request.language = "fr".to_string();

        let prompt = build_generation_prompt(&request);
        assert!(prompt.contains("write about cats"));
        assert!(prompt.contains("blog content"));
        assert!(prompt.contains("Tone: casual"));
        assert!(prompt.contains("short (about 100-200 words)"));
        assert!(prompt.contains("pet owners"));
        assert!(prompt.contains("Language: fr"));
        assert!(prompt.contains("cats, kittens"));
        assert!(!prompt.contains('{'), "unfilled placeholder in: {prompt}");
    }

    #[test]
    fn test_prompt_without_keywords_says_none() {
        let request = GenerationRequest::new("p", "ad", "bold", "short");
        assert!(build_generation_prompt(&request).contains("naturally: none"));
    }

    #[test]
    fn test_brief_with_braces_is_not_rewritten() {
        let request = GenerationRequest::new("explain {tone} tags", "blog", "dry", "short");
        let prompt = build_generation_prompt(&request);
        assert!(prompt.contains("explain {tone} tags"));
    }
}

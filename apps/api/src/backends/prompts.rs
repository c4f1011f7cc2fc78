// Prompt constants for the LLM-backed generation and optimization backends.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for drafting new content.
pub const GENERATION_SYSTEM: &str = "You are an experienced marketing copywriter and editor. \
    You write clear, accurate, audience-appropriate content in the requested language. \
    Use markdown headings (#, ##) for long-form pieces such as blog posts and landing pages.";

/// Generation prompt template. Replace every `{placeholder}` before sending.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Write a piece of {content_type} content.

BRIEF:
{prompt}

PARAMETERS:
- Tone: {tone}
- Length: {length} ({length_hint})
- Target audience: {target_audience}
- Language: {language}
- Keywords to include naturally: {keywords}

{plain_output_instruction}"#;

/// System prompt for rewriting — enforces JSON-only output.
pub const OPTIMIZATION_SYSTEM: &str = "You are a senior editor who improves readability, \
    engagement and clarity without changing meaning or inventing facts. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Optimization prompt template. Replace every `{placeholder}` before sending.
pub const OPTIMIZATION_PROMPT_TEMPLATE: &str = r#"Rewrite the content below for a "{optimization_type}" optimization pass.

TARGET METRICS (0-100):
- Flesch reading ease: {readability_score}
- Engagement: {engagement_score}
- Clarity: {clarity_score}

Keep markdown headings. Keep every factual claim. If the content already meets the
targets, return null for optimized_content.

Return a JSON object with this EXACT schema:
{
  "optimized_content": "the rewritten content, or null",
  "improvements": ["short description of each change"],
  "engagement_score": 0,
  "clarity_score": 0
}

CONTENT:
{content}"#;

/// Variation prompt template. The model answers with a JSON array.
pub const VARIATIONS_PROMPT_TEMPLATE: &str = r#"Produce {num_variations} distinct variations of the content below.
Vary the {variation_type} while keeping the core message.

Return a JSON array with this EXACT schema:
[
  {"content": "the variation", "variation_type": "{variation_type}", "description": "what changed"}
]

CONTENT:
{content}"#;

/// Maps the request's length label to a concrete word range for the model.
pub fn length_hint(length: &str) -> &'static str {
    match length.to_ascii_lowercase().as_str() {
        "short" => "about 100-200 words",
        "medium" => "about 300-500 words",
        "long" => "about 800-1200 words",
        _ => "use your judgement for the content type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_hint_known_labels() {
        assert_eq!(length_hint("Short"), "about 100-200 words");
        assert_eq!(length_hint("long"), "about 800-1200 words");
    }

    #[test]
    fn test_length_hint_unknown_label_falls_back() {
        assert!(length_hint("epic").contains("judgement"));
    }
}

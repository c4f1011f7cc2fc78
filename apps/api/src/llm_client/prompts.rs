// Cross-cutting prompt fragments shared by every backend that talks to the LLM.
// Each backend keeps its own templates in backends/prompts.rs.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every prompt that produces publishable copy.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "\
    Return only the finished content. Do NOT add a preamble such as 'Here is your post', \
    do NOT wrap the content in quotes, and do NOT comment on your own output.";

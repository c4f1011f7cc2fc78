//! Recommendation rules.
//!
//! Each rule compares one sub-score against a fixed threshold and appends its
//! message when it fires. Output order is rule order, not severity.
//!
//! A sub-score the backend did not report counts as 0, so a missing field fails
//! every "below threshold" check. Keep it that way: flipping absence to a pass
//! would change the recommendations callers already see.

use crate::backends::{ReadabilityReport, SeoReport};

pub const MIN_READABILITY: f64 = 60.0;
pub const MAX_AVG_SENTENCE_LENGTH: f64 = 20.0;
pub const MIN_KEYWORD_DENSITY: f64 = 1.0;
pub const MIN_META_DESCRIPTION: f64 = 70.0;
pub const MIN_HEADING_STRUCTURE: f64 = 70.0;
pub const MIN_QUALITY: f64 = 70.0;

pub const SIMPLIFY_LANGUAGE: &str =
    "Improve readability by using shorter sentences and simpler words";
pub const SHORTEN_SENTENCES: &str = "Reduce average sentence length for better readability";
pub const RAISE_KEYWORD_DENSITY: &str = "Increase keyword density for better SEO";
pub const IMPROVE_META_DESCRIPTION: &str = "Improve meta description for better search visibility";
pub const IMPROVE_HEADINGS: &str = "Improve heading structure with proper H1, H2, H3 hierarchy";
pub const QUALITY_WARNING: &str = "Overall content quality needs improvement";

/// Builds the ordered list of improvement suggestions.
pub fn build_recommendations(
    readability: &ReadabilityReport,
    seo: &SeoReport,
    quality_score: f64,
) -> Vec<String> {
    let score = |value: Option<f64>| value.unwrap_or(0.0);

    let rules = [
        (score(readability.score) < MIN_READABILITY, SIMPLIFY_LANGUAGE),
        (
            score(readability.avg_sentence_length) > MAX_AVG_SENTENCE_LENGTH,
            SHORTEN_SENTENCES,
        ),
        (
            score(seo.keyword_density) < MIN_KEYWORD_DENSITY,
            RAISE_KEYWORD_DENSITY,
        ),
        (
            score(seo.meta_description_score) < MIN_META_DESCRIPTION,
            IMPROVE_META_DESCRIPTION,
        ),
        (
            score(seo.heading_structure_score) < MIN_HEADING_STRUCTURE,
            IMPROVE_HEADINGS,
        ),
        (quality_score < MIN_QUALITY, QUALITY_WARNING),
    ];

    rules
        .into_iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, message)| message.to_string())
        .collect()
}

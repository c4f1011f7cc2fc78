//! Quality scoring — folds readability and SEO into one weighted score.
//!
//! Weights depend on the content type: short social copy is judged mostly on
//! readability, landing pages mostly on SEO. Unknown types weigh both equally.

use serde::Serialize;
use tracing::info;

use crate::backends::readability::round2;
use crate::backends::BackendError;
use crate::content::models::QualityAssessment;
use crate::content::pipeline::ContentService;
use crate::content::recommendations::build_recommendations;

/// Readability/SEO weight pair. The two always sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub readability: f64,
    pub seo: f64,
}

impl ScoreWeights {
    const fn new(readability: f64, seo: f64) -> Self {
        Self { readability, seo }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Used for any content type missing from `WEIGHT_TABLE`.
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights::new(0.5, 0.5);

/// Per-content-type weights. Process-wide and read-only.
pub const WEIGHT_TABLE: &[(&str, ScoreWeights)] = &[
    ("blog", ScoreWeights::new(0.4, 0.6)),
    ("social", ScoreWeights::new(0.7, 0.3)),
    ("email", ScoreWeights::new(0.6, 0.4)),
    ("ad", ScoreWeights::new(0.5, 0.5)),
    ("landing", ScoreWeights::new(0.3, 0.7)),
];

/// Looks up the weights for `content_type` (exact match).
pub fn weights_for(content_type: &str) -> ScoreWeights {
    WEIGHT_TABLE
        .iter()
        .find(|(name, _)| *name == content_type)
        .map(|(_, weights)| *weights)
        .unwrap_or(DEFAULT_WEIGHTS)
}

/// `readability × w.readability + seo × w.seo`, rounded to two decimals.
/// Inputs are trusted to already be in [0, 100]; nothing is clamped here.
pub fn compute_quality_score(readability_score: f64, seo_score: f64, content_type: &str) -> f64 {
    let weights = weights_for(content_type);
    round2(readability_score * weights.readability + seo_score * weights.seo)
}

impl ContentService {
    /// Measures existing content: readability, SEO, weighted score and
    /// recommendations. Nothing is cached; every call re-runs both backends.
    pub async fn analyze_content_quality(
        &self,
        content: &str,
        content_type: &str,
        keywords: &[String],
    ) -> Result<QualityAssessment, BackendError> {
        let readability = self.optimizer.analyze_readability(content).await?;
        let seo_analysis = self.seo.analyze(content, keywords).await?;

        let quality_score = compute_quality_score(
            readability.score.unwrap_or(0.0),
            seo_analysis.overall_score.unwrap_or(0.0),
            content_type,
        );
        let recommendations = build_recommendations(&readability, &seo_analysis, quality_score);

        info!(
            "Quality analysis for {} content: score={} ({} recommendations)",
            content_type,
            quality_score,
            recommendations.len()
        );

        Ok(QualityAssessment {
            quality_score,
            readability,
            seo_analysis,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{ReadabilityReport, SeoReport};
    use crate::content::recommendations::QUALITY_WARNING;
    use crate::content::test_support::StubBackends;

    #[test]
    fn test_social_weights_favour_readability() {
        assert_eq!(compute_quality_score(80.0, 60.0, "social"), 74.0);
    }

    #[test]
    fn test_blog_weights_favour_seo() {
        // 80*0.4 + 60*0.6 = 32 + 36
        assert_eq!(compute_quality_score(80.0, 60.0, "blog"), 68.0);
    }

    #[test]
    fn test_unknown_type_uses_even_split() {
        assert_eq!(weights_for("podcast"), DEFAULT_WEIGHTS);
        assert_eq!(weights_for("general"), DEFAULT_WEIGHTS);
        assert_eq!(compute_quality_score(80.0, 60.0, "podcast"), 70.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(weights_for("Blog"), DEFAULT_WEIGHTS);
    }

    #[test]
    fn test_every_weight_pair_sums_to_one() {
        for (name, weights) in WEIGHT_TABLE {
            assert!(
                (weights.readability + weights.seo - 1.0).abs() < 1e-9,
                "{name} weights do not sum to 1"
            );
        }
        assert!((DEFAULT_WEIGHTS.readability + DEFAULT_WEIGHTS.seo - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        // 33.333*0.3 + 66.667*0.7 = 9.9999 + 46.6669 = 56.6668
        assert_eq!(compute_quality_score(33.333, 66.667, "landing"), 56.67);
    }

    #[test]
    fn test_out_of_range_inputs_are_not_clamped() {
        assert_eq!(compute_quality_score(150.0, 150.0, "ad"), 150.0);
    }

    #[tokio::test]
    async fn test_analyze_quality_combines_backend_reports() {
        let stubs = StubBackends::new()
            .with_readability(ReadabilityReport {
                score: Some(80.0),
                avg_sentence_length: Some(12.0),
                ..Default::default()
            })
            .with_seo(SeoReport {
                overall_score: Some(60.0),
                keyword_density: Some(2.0),
                meta_description_score: Some(90.0),
                heading_structure_score: Some(90.0),
                ..Default::default()
            });
        let service = stubs.service();

        let assessment = service
            .analyze_content_quality("Cats are great.", "social", &[])
            .await
            .unwrap();

        assert_eq!(assessment.quality_score, 74.0);
        assert!(assessment.recommendations.is_empty());
        assert_eq!(stubs.calls(), vec!["readability", "seo"]);
    }

    #[tokio::test]
    async fn test_analyze_quality_with_empty_reports_defaults_to_zero() {
        let stubs = StubBackends::new()
            .with_readability(ReadabilityReport::default())
            .with_seo(SeoReport::default());

        let assessment = stubs
            .service()
            .analyze_content_quality("text", "blog", &[])
            .await
            .unwrap();

        assert_eq!(assessment.quality_score, 0.0);
        assert_eq!(assessment.recommendations.len(), 5);
        assert_eq!(assessment.recommendations.last().unwrap(), QUALITY_WARNING);
    }

    #[tokio::test]
    async fn test_analyze_quality_propagates_seo_failure() {
        let stubs = StubBackends::new().failing_seo();
        let err = stubs
            .service()
            .analyze_content_quality("text", "blog", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Seo(_)));
    }
}

//! Keyword SEO analyzer — pure-Rust, deterministic, no network call.
//!
//! Algorithm:
//! 1. keyword_density = words covered by keyword occurrences / total words × 100
//! 2. meta_description_score from the opening paragraph length (120–160 chars is ideal)
//! 3. heading_structure_score from the markdown heading hierarchy
//! 4. overall_score = mean of the component scores (keyword component only
//!    when target keywords were supplied)

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::backends::readability::{round2, words};
use crate::backends::{BackendError, SeoBackend, SeoReport};

const IDEAL_DENSITY: (f64, f64) = (1.0, 3.0);
const IDEAL_META_CHARS: (usize, usize) = (120, 160);
const ACCEPTABLE_META_CHARS: (usize, usize) = (80, 200);
/// Above this many words a piece is expected to carry H2 sections.
const LONG_FORM_WORDS: usize = 300;

pub struct KeywordSeoAnalyzer;

#[async_trait]
impl SeoBackend for KeywordSeoAnalyzer {
    async fn analyze(
        &self,
        content: &str,
        target_keywords: &[String],
    ) -> Result<SeoReport, BackendError> {
        Ok(compute_seo_report(content, target_keywords))
    }
}

pub fn compute_seo_report(content: &str, target_keywords: &[String]) -> SeoReport {
    let tokens = words(content);

    let mut covered = vec![false; tokens.len()];
    let mut keyword_counts = BTreeMap::new();
    for keyword in target_keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
        let phrase = words(keyword);
        let starts = phrase_starts(&tokens, &phrase);
        for &start in &starts {
            covered[start..start + phrase.len()].fill(true);
        }
        keyword_counts.insert(keyword.to_string(), starts.len());
    }

    // Each word counts once even when several keywords overlap on it.
    let covered = covered.iter().filter(|&&c| c).count();
    let keyword_density = if tokens.is_empty() {
        0.0
    } else {
        round2(covered as f64 / tokens.len() as f64 * 100.0)
    };

    let meta_description_score = meta_description_score(content);
    let heading_structure_score = heading_structure_score(content, tokens.len());

    let mut components = vec![meta_description_score, heading_structure_score];
    if !keyword_counts.is_empty() {
        components.push(density_score(keyword_density));
    }
    let overall_score = round2(components.iter().sum::<f64>() / components.len() as f64);

    SeoReport {
        overall_score: Some(overall_score),
        keyword_density: Some(keyword_density),
        meta_description_score: Some(meta_description_score),
        heading_structure_score: Some(heading_structure_score),
        keyword_counts,
    }
}

/// Start positions of non-overlapping occurrences of `phrase` in `tokens`.
fn phrase_starts(tokens: &[String], phrase: &[String]) -> Vec<usize> {
    let mut starts = Vec::new();
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return starts;
    }

    let mut i = 0;
    while i + phrase.len() <= tokens.len() {
        if tokens[i..i + phrase.len()] == *phrase {
            starts.push(i);
            i += phrase.len();
        } else {
            i += 1;
        }
    }
    starts
}

fn density_score(density: f64) -> f64 {
    let (low, high) = IDEAL_DENSITY;
    if density < low {
        round2(density / low * 100.0)
    } else if density <= high {
        100.0
    } else {
        // keyword stuffing
        (100.0 - (density - high) * 20.0).max(0.0)
    }
}

/// Scores the first non-heading paragraph as the page's meta description.
fn meta_description_score(content: &str) -> f64 {
    let opening = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && heading_level(line).is_none());

    let Some(opening) = opening else {
        return 0.0;
    };

    let chars = opening.chars().count();
    if (IDEAL_META_CHARS.0..=IDEAL_META_CHARS.1).contains(&chars) {
        100.0
    } else if (ACCEPTABLE_META_CHARS.0..=ACCEPTABLE_META_CHARS.1).contains(&chars) {
        70.0
    } else {
        40.0
    }
}

fn heading_structure_score(content: &str, word_count: usize) -> f64 {
    let levels: Vec<usize> = content
        .lines()
        .filter_map(|line| heading_level(line.trim()))
        .collect();

    if levels.is_empty() {
        return 0.0;
    }

    let mut score = 100.0_f64;

    match levels.iter().filter(|&&l| l == 1).count() {
        0 => score -= 30.0,
        1 => {}
        _ => score -= 20.0,
    }

    let skipped = levels.windows(2).filter(|w| w[1] > w[0] + 1).count();
    score -= 15.0 * skipped as f64;

    if word_count > LONG_FORM_WORDS && !levels.contains(&2) {
        score -= 20.0;
    }

    score.clamp(0.0, 100.0)
}

/// `Some(level)` for ATX markdown headings (`# ` through `###### `).
fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    let rest = &line[hashes..];
    if (1..=6).contains(&hashes) && rest.starts_with(' ') && !rest.trim().is_empty() {
        Some(hashes)
    } else {
        None
    }
}

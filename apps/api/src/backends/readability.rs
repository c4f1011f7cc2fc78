//! Local readability measurement (Flesch reading ease + Flesch-Kincaid grade).
//!
//! Pure functions, no I/O. Used by `LlmOptimizer` both to score its rewrites
//! and to answer standalone readability requests.

use crate::backends::ReadabilityReport;

/// Computes a readability report for `text`.
///
/// Empty text (no words) yields a zero score and zero averages.
pub fn analyze(text: &str) -> ReadabilityReport {
    let words = words(text);
    let word_count = words.len();
    if word_count == 0 {
        return ReadabilityReport {
            score: Some(0.0),
            avg_sentence_length: Some(0.0),
            grade_level: Some(0.0),
            word_count: 0,
            sentence_count: 0,
        };
    }

    let sentence_count = count_sentences(text).max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllables as f64 / word_count as f64;

    let reading_ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    ReadabilityReport {
        score: Some(round2(reading_ease.clamp(0.0, 100.0))),
        avg_sentence_length: Some(round2(words_per_sentence)),
        grade_level: Some(round2(grade.max(0.0))),
        word_count,
        sentence_count,
    }
}

/// Lowercased alphabetic words; markdown markers and punctuation are dropped.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .collect()
}

/// Counts runs of sentence terminators that follow some content. Lines without
/// a terminator (headings, list items) count as one sentence each.
fn count_sentences(text: &str) -> usize {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut count = 0;
            let mut in_sentence = false;
            for c in line.chars() {
                if matches!(c, '.' | '!' | '?') {
                    if in_sentence {
                        count += 1;
                        in_sentence = false;
                    }
                } else if c.is_alphanumeric() {
                    in_sentence = true;
                }
            }
            if in_sentence {
                count += 1;
            }
            count
        })
        .sum()
}

/// Vowel-group syllable estimate with a silent trailing "e". Never below 1.
fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let len = letters.len();
    let consonant_le = len > 2 && letters[len - 2] == 'l' && !is_vowel(letters[len - 3]);
    if len > 2
        && letters[len - 1] == 'e'
        && !is_vowel(letters[len - 2])
        && !consonant_le
        && groups > 1
    {
        groups -= 1;
    }

    groups.max(1)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        let report = analyze("   ");
        assert_eq!(report.score, Some(0.0));
        assert_eq!(report.word_count, 0);
        assert_eq!(report.sentence_count, 0);
    }

    #[test]
    fn test_simple_text_reads_easily() {
        let report = analyze("The cat sat. The dog ran. We all had fun.");
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.word_count, 10);
        assert!(report.score.unwrap() > 90.0, "got {:?}", report.score);
    }

    #[test]
    fn test_dense_text_scores_lower_than_simple_text() {
        let simple = analyze("Cats nap a lot. They like sun. They purr.");
        let dense = analyze(
            "Contemporary organizational methodologies necessitate comprehensive \
             interdisciplinary collaboration throughout implementation activities.",
        );
        assert!(dense.score.unwrap() < simple.score.unwrap());
        assert!(dense.grade_level.unwrap() > simple.grade_level.unwrap());
    }

    #[test]
    fn test_average_sentence_length() {
        let report = analyze("One two three four. Five six.");
        assert_eq!(report.avg_sentence_length, Some(3.0));
    }

    #[test]
    fn test_heading_line_counts_as_sentence() {
        let report = analyze("# Cats\nCats are lovely pets.");
        assert_eq!(report.sentence_count, 2);
    }

    #[test]
    fn test_score_is_clamped_to_range() {
        let report = analyze(
            "Incomprehensibilities notwithstanding, institutionalization \
             characteristically overcomplicates intercommunication.",
        );
        let score = report.score.unwrap();
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_syllable_counts() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("readable"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("42"), 1);
    }
}

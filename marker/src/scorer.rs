//! # Scorer Module
//!
//! Heuristic content scoring for free-text submissions.
//!
//! A submission earns partial credit for each independent signal it shows. The
//! weights are fractions of the assignment's `max_score` and add up to exactly
//! 1.0, so a submission that satisfies every check earns full marks:
//!
//! | signal                                                     | weight |
//! |------------------------------------------------------------|--------|
//! | more than 50 characters                                    | 0.30   |
//! | more than 200 characters                                   | 0.20   |
//! | mentions `explain`, `because`, `therefore` or `analysis`   | 0.20   |
//! | mentions `example`, `instance` or `case`                   | 0.15   |
//! | more than 20 whitespace-separated words                    | 0.15   |

use crate::error::MarkerError;

const SHORT_LENGTH: usize = 50;
const LONG_LENGTH: usize = 200;
const MIN_WORDS: usize = 20;

const SHORT_LENGTH_WEIGHT: f64 = 0.3;
const LONG_LENGTH_WEIGHT: f64 = 0.2;
const REASONING_WEIGHT: f64 = 0.2;
const EXAMPLE_WEIGHT: f64 = 0.15;
const WORD_COUNT_WEIGHT: f64 = 0.15;

const REASONING_KEYWORDS: [&str; 4] = ["explain", "because", "therefore", "analysis"];
const EXAMPLE_KEYWORDS: [&str; 3] = ["example", "instance", "case"];

/// Scores `content` against an assignment worth `max_score` points.
///
/// Lengths are measured in characters, keyword checks are case-insensitive
/// substring matches, and the result is clamped to `[0, max_score]`.
///
/// # Errors
///
/// Returns [`MarkerError::InvalidMaxScore`] when `max_score` is not positive.
///
/// # Example
///
/// ```
/// use marker::scorer::score;
///
/// assert_eq!(score("", 100).unwrap(), 0.0);
/// assert!(score("anything", 0).is_err());
/// ```
pub fn score(content: &str, max_score: i64) -> Result<f64, MarkerError> {
    if max_score <= 0 {
        return Err(MarkerError::InvalidMaxScore(max_score));
    }

    let max = max_score as f64;
    let lowered = content.to_lowercase();
    let length = content.chars().count();

    let mut total = 0.0;

    if length > SHORT_LENGTH {
        total += max * SHORT_LENGTH_WEIGHT;
    }
    if length > LONG_LENGTH {
        total += max * LONG_LENGTH_WEIGHT;
    }
    if contains_any(&lowered, &REASONING_KEYWORDS) {
        total += max * REASONING_WEIGHT;
    }
    if contains_any(&lowered, &EXAMPLE_KEYWORDS) {
        total += max * EXAMPLE_WEIGHT;
    }
    if content.split_whitespace().count() > MIN_WORDS {
        total += max * WORD_COUNT_WEIGHT;
    }

    let clamped = total.clamp(0.0, max);
    tracing::debug!(length, max_score, score = clamped, "Scored submission content");

    Ok(clamped)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

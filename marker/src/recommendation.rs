//! # Recommendation Engine
//!
//! Maps a student's graded history onto a learning path.
//!
//! The performance ratio is the sum of earned grade points divided by the sum of
//! possible points across every submission. Ungraded submissions count as zero
//! earned points but still contribute their assignment's `max_score` to the
//! denominator.

use crate::types::{GradedSubmission, LearningPath, Recommendation};

const FOUNDATIONAL_BELOW: f64 = 0.6;
const INTERMEDIATE_BELOW: f64 = 0.8;

const BEGINNER_MESSAGES: [&str; 2] = [
    "Start by completing your first assignment to get personalized recommendations",
    "Explore different subjects to find your interests",
];

const FOUNDATIONAL_MESSAGES: [&str; 2] = [
    "Focus on understanding core concepts before moving to advanced topics",
    "Consider reviewing previous lessons and seeking help from your teacher",
];

const INTERMEDIATE_MESSAGES: [&str; 2] = [
    "You're making good progress! Try tackling more challenging assignments",
    "Consider exploring related topics to deepen your understanding",
];

const ADVANCED_MESSAGES: [&str; 2] = [
    "Excellent work! You're ready for advanced topics and projects",
    "Consider helping classmates or exploring independent research",
];

/// Computes the learning recommendation for a student's submission history.
///
/// # Behavior
///
/// - An empty history yields the onboarding messages, [`LearningPath::Beginner`]
///   and a performance score of `0.0`.
/// - A history whose assignments are worth zero points in total yields a ratio
///   of `0.0` rather than dividing by zero.
/// - Otherwise the ratio is classified with `< 0.6` foundational, `< 0.8`
///   intermediate, and anything higher advanced.
///
/// # Example
///
/// ```
/// use marker::{recommend, GradedSubmission, LearningPath};
///
/// let history = [
///     GradedSubmission::new(Some(35.0), 50),
///     GradedSubmission::new(Some(15.0), 50),
/// ];
/// let rec = recommend(&history);
/// assert_eq!(rec.learning_path, LearningPath::Foundational);
/// assert_eq!(rec.performance_score, 50.0);
/// ```
pub fn recommend(submissions: &[GradedSubmission]) -> Recommendation {
    if submissions.is_empty() {
        return build(LearningPath::Beginner, 0.0);
    }

    let total_score: f64 = submissions.iter().map(|s| s.grade.unwrap_or(0.0)).sum();
    let total_max: i64 = submissions.iter().map(|s| s.max_score).sum();

    let ratio = performance_ratio(total_score, total_max);
    let path = classify(ratio);

    tracing::debug!(
        submissions = submissions.len(),
        total_score,
        total_max,
        ratio,
        path = %path,
        "Computed learning recommendation"
    );

    build(path, ratio * 100.0)
}

/// Ratio of earned to possible points, `0.0` when nothing was possible.
pub fn performance_ratio(total_score: f64, total_max: i64) -> f64 {
    if total_max > 0 {
        total_score / total_max as f64
    } else {
        0.0
    }
}

/// Classifies a performance ratio into a learning path.
pub fn classify(ratio: f64) -> LearningPath {
    if ratio < FOUNDATIONAL_BELOW {
        LearningPath::Foundational
    } else if ratio < INTERMEDIATE_BELOW {
        LearningPath::Intermediate
    } else {
        LearningPath::Advanced
    }
}

fn messages(path: LearningPath) -> [&'static str; 2] {
    match path {
        LearningPath::Beginner => BEGINNER_MESSAGES,
        LearningPath::Foundational => FOUNDATIONAL_MESSAGES,
        LearningPath::Intermediate => INTERMEDIATE_MESSAGES,
        LearningPath::Advanced => ADVANCED_MESSAGES,
    }
}

fn build(learning_path: LearningPath, performance_score: f64) -> Recommendation {
    Recommendation {
        recommendations: messages(learning_path).iter().map(|m| m.to_string()).collect(),
        learning_path,
        performance_score,
    }
}

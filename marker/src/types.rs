//! # Types Module
//!
//! Data structures shared by the scorer and the recommendation engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One historical submission as seen by the recommendation engine.
///
/// The grade is `None` until the submission has been scored; `max_score` is
/// taken from the assignment the submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradedSubmission {
    pub grade: Option<f64>,
    pub max_score: i64,
}

impl GradedSubmission {
    pub fn new(grade: Option<f64>, max_score: i64) -> Self {
        Self { grade, max_score }
    }
}

/// Coarse difficulty track assigned to a student from aggregate performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningPath {
    /// No submission history yet.
    Beginner,
    /// Performance ratio below 0.6.
    Foundational,
    /// Performance ratio in `[0.6, 0.8)`.
    Intermediate,
    /// Performance ratio of 0.8 or above.
    Advanced,
}

impl LearningPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningPath::Beginner => "beginner",
            LearningPath::Foundational => "foundational",
            LearningPath::Intermediate => "intermediate",
            LearningPath::Advanced => "advanced",
        }
    }
}

impl fmt::Display for LearningPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the recommendation engine.
///
/// Serializes to the shape returned by `GET /api/ai/recommendations`:
/// ```json
/// {
///   "recommendations": ["...", "..."],
///   "learning_path": "intermediate",
///   "performance_score": 72.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendations: Vec<String>,
    pub learning_path: LearningPath,
    pub performance_score: f64,
}

//! # Feedback
//!
//! Builds the feedback text stored alongside every auto-graded submission.

/// Renders the auto-grading feedback message for a score out of `max_score`.
///
/// The score is shown with one decimal place:
///
/// ```
/// use marker::feedback::auto_feedback;
///
/// assert_eq!(
///     auto_feedback(85.0, 100),
///     "AI Auto-graded: Your submission received 85.0/100 points based on content analysis."
/// );
/// ```
pub fn auto_feedback(score: f64, max_score: i64) -> String {
    format!(
        "AI Auto-graded: Your submission received {score:.1}/{max_score} points based on content analysis."
    )
}

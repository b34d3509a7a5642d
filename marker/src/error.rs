//! Marker Error Types
//!
//! The grading core has a single input-validity concern: an assignment's
//! `max_score` must be positive before any content can be scored against it.
//! Everything else (missing assignments, permissions) is handled by the caller.

use thiserror::Error;

/// Represents all error types that can occur in the marker system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// The assignment's maximum score is zero or negative.
    #[error("max_score must be a positive number, got {0}")]
    InvalidMaxScore(i64),
}

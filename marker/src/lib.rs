//! # Marker Library
//!
//! Rule-based grading core for the LMS backend.
//!
//! Two small, stateless pieces live here:
//! - [`scorer`]: scores a free-text submission against an assignment's `max_score`
//!   using content heuristics (length, reasoning keywords, examples, word count).
//! - [`recommendation`]: folds a student's graded history into a performance ratio
//!   and maps it onto a learning path with two recommendation messages.
//!
//! Nothing in this crate performs I/O. Callers fetch submissions and assignments
//! from storage and hand fully materialized values in; every function is safe to
//! call concurrently from any number of request handlers.

pub mod error;
pub mod feedback;
pub mod recommendation;
pub mod scorer;
pub mod types;

pub use error::MarkerError;
pub use feedback::auto_feedback;
pub use recommendation::recommend;
pub use scorer::score;
pub use types::{GradedSubmission, LearningPath, Recommendation};

//! Service layer for the LMS backend.
//!
//! Each service is a stateless unit struct whose associated functions take a
//! database connection and return [`ServiceError`] on failure. Route handlers
//! call into these and translate errors into HTTP responses.

pub mod assignment_service;
pub mod course_service;
pub mod error;
pub mod recommendation_service;
pub mod submission_service;
pub mod user_service;

pub use error::ServiceError;

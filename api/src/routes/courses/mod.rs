//! # Courses Routes Module
//!
//! Routes for the `/courses` endpoint group.
//!
//! ## Structure
//! - `post.rs` — create a course, enroll in a course
//! - `get.rs` — list, browse, fetch and enrollment status

pub mod get;
pub mod post;

use crate::auth::guards::{allow_authenticated, require_student, require_teacher};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use get::{browse_courses, get_course, get_courses, get_enrollment_status};
use post::{create_course, enroll};

/// Builds the `/courses` route group.
///
/// - `POST /courses` → create a course (teacher)
/// - `GET  /courses` → courses taught or enrolled in (authenticated)
/// - `GET  /courses/browse` → every course (student)
/// - `GET  /courses/{course_id}` → one course (authenticated)
/// - `GET  /courses/{course_id}/enrollment-status` → `{ enrolled }` (authenticated)
/// - `POST /courses/{course_id}/enroll` → enroll (student)
pub fn course_routes(app_state: AppState) -> Router<AppState> {
    let authenticated = from_fn_with_state(app_state.clone(), allow_authenticated);
    let teacher = from_fn_with_state(app_state.clone(), require_teacher);
    let student = from_fn_with_state(app_state, require_student);

    Router::new()
        .route("/", post(create_course).route_layer(teacher))
        .route("/", get(get_courses).route_layer(authenticated.clone()))
        .route("/browse", get(browse_courses).route_layer(student.clone()))
        .route("/{course_id}", get(get_course).route_layer(authenticated.clone()))
        .route(
            "/{course_id}/enrollment-status",
            get(get_enrollment_status).route_layer(authenticated),
        )
        .route("/{course_id}/enroll", post(enroll).route_layer(student))
}

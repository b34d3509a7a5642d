//! # Assignments Routes Module
//!
//! Routes for the `/assignments` endpoint group.

pub mod get;
pub mod post;

use crate::auth::guards::{allow_authenticated, require_teacher};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use get::{get_assignment, get_course_assignments};
use post::create_assignment;

/// Builds the `/assignments` route group.
///
/// - `POST /assignments` → create an assignment in an owned course (teacher)
/// - `GET  /assignments/{assignment_id}` → one assignment (authenticated)
/// - `GET  /assignments/course/{course_id}` → a course's assignments (authenticated)
pub fn assignment_routes(app_state: AppState) -> Router<AppState> {
    let authenticated = from_fn_with_state(app_state.clone(), allow_authenticated);

    Router::new()
        .route(
            "/",
            post(create_assignment).route_layer(from_fn_with_state(app_state, require_teacher)),
        )
        .route("/{assignment_id}", get(get_assignment).route_layer(authenticated.clone()))
        .route("/course/{course_id}", get(get_course_assignments).route_layer(authenticated))
}

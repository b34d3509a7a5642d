//! # Submissions Routes Module
//!
//! Routes for the `/submissions` endpoint group. Submissions are scored
//! synchronously when they are created.

pub mod get;
pub mod post;

use crate::auth::guards::{allow_authenticated, require_student};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use get::{get_assignment_submissions, get_submission_grades};
use post::create_submission;

/// Builds the `/submissions` route group.
///
/// - `POST /submissions` → submit and auto-grade (student)
/// - `GET  /submissions/assignment/{assignment_id}` → submissions visible to the caller
/// - `GET  /submissions/{submission_id}/grades` → grade history of a submission
pub fn submission_routes(app_state: AppState) -> Router<AppState> {
    let authenticated = from_fn_with_state(app_state.clone(), allow_authenticated);

    Router::new()
        .route(
            "/",
            post(create_submission).route_layer(from_fn_with_state(app_state, require_student)),
        )
        .route(
            "/assignment/{assignment_id}",
            get(get_assignment_submissions).route_layer(authenticated.clone()),
        )
        .route(
            "/{submission_id}/grades",
            get(get_submission_grades).route_layer(authenticated),
        )
}

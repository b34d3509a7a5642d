pub mod get;

use crate::auth::guards::require_student;
use axum::{Router, middleware::from_fn_with_state, routing::get};
use util::state::AppState;

use get::get_recommendations;

/// Builds the `/ai` route group.
///
/// - `GET /ai/recommendations` → learning recommendations (student)
pub fn ai_routes(app_state: AppState) -> Router<AppState> {
    Router::new().route(
        "/recommendations",
        get(get_recommendations).route_layer(from_fn_with_state(app_state, require_student)),
    )
}

use crate::response::ApiResponse;
use crate::routes::common::{AssignmentResponse, service_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::assignment_service::AssignmentService;
use util::state::AppState;

/// GET /api/assignments/{assignment_id}
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 5,
///     "course_id": 1,
///     "title": "Essay: The Water Cycle",
///     "description": "Explain each stage with an example",
///     "due_date": "2025-10-14T23:59:00+00:00",
///     "max_score": 100,
///     "created_at": "2025-10-01T08:00:00+00:00"
///   },
///   "message": "Assignment retrieved successfully"
/// }
/// ```
///
/// ### Response: 404 Not Found
/// `"Assignment not found"`
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> impl IntoResponse {
    match AssignmentService::get(app_state.db(), assignment_id).await {
        Ok(assignment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment retrieved successfully",
            )),
        ),
        Err(e) => service_error(e),
    }
}

/// GET /api/assignments/course/{course_id}
///
/// 404 when the course does not exist.
pub async fn get_course_assignments(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match AssignmentService::list_for_course(app_state.db(), course_id).await {
        Ok(assignments) => {
            let data: Vec<AssignmentResponse> =
                assignments.into_iter().map(AssignmentResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Assignments retrieved successfully")),
            )
        }
        Err(e) => service_error(e),
    }
}

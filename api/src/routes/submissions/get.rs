use crate::response::ApiResponse;
use crate::routes::common::{GradeResponse, SubmissionResponse, service_error};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::Model as User;
use services::submission_service::SubmissionService;
use util::state::AppState;

/// GET /api/submissions/assignment/{assignment_id}
///
/// Teachers see every submission for the assignment; students see only their own.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 12,
///       "assignment_id": 5,
///       "student_id": 8,
///       "content": "Evaporation happens because...",
///       "submitted_at": "2025-10-02T10:15:00+00:00",
///       "grade": 85.0
///     }
///   ],
///   "message": "Submissions retrieved successfully"
/// }
/// ```
///
/// ### Response: 404 Not Found
/// `"Assignment not found"`
pub async fn get_assignment_submissions(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
    Path(assignment_id): Path<i64>,
) -> impl IntoResponse {
    match SubmissionService::list_for_assignment(app_state.db(), &user, assignment_id).await {
        Ok(submissions) => {
            let data: Vec<SubmissionResponse> =
                submissions.into_iter().map(SubmissionResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Submissions retrieved successfully")),
            )
        }
        Err(e) => service_error(e),
    }
}

/// GET /api/submissions/{submission_id}/grades
///
/// Visible to the student who submitted and to the teacher of the course;
/// everyone else gets `403`.
pub async fn get_submission_grades(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
    Path(submission_id): Path<i64>,
) -> impl IntoResponse {
    match SubmissionService::grades_for_submission(app_state.db(), &user, submission_id).await {
        Ok(grades) => {
            let data: Vec<GradeResponse> = grades.into_iter().map(GradeResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Grades retrieved successfully")),
            )
        }
        Err(e) => service_error(e),
    }
}

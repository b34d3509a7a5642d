use crate::response::ApiResponse;
use crate::routes::common::{SubmissionResponse, service_error};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::Model as User;
use serde::Deserialize;
use services::submission_service::SubmissionService;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub content: String,
}

/// POST /api/submissions
///
/// Submit an answer. The content is scored immediately and a grade record
/// with automatic feedback is stored alongside the submission.
///
/// ### Request Body
/// ```json
/// { "assignment_id": 5, "content": "Evaporation happens because..." }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 12,
///     "assignment_id": 5,
///     "student_id": 8,
///     "content": "Evaporation happens because...",
///     "submitted_at": "2025-10-02T10:15:00+00:00",
///     "grade": 85.0
///   },
///   "message": "AI Auto-graded: Your submission received 85.0/100 points based on content analysis."
/// }
/// ```
///
/// - `403 Forbidden` (caller is not a student)
/// - `404 Not Found` (`"Assignment not found"`)
pub async fn create_submission(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateSubmissionRequest>,
) -> impl IntoResponse {
    match SubmissionService::submit(app_state.db(), user.id, req.assignment_id, &req.content).await {
        Ok(graded) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubmissionResponse::from(graded.submission),
                graded.grade.feedback,
            )),
        ),
        Err(e) => service_error(e),
    }
}

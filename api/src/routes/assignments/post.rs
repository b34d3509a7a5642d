use crate::response::ApiResponse;
use crate::routes::common::{AssignmentResponse, service_error};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use common::format_validation_errors;
use db::models::user::Model as User;
use serde::Deserialize;
use services::assignment_service::{AssignmentService, CreateAssignment};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    pub course_id: i64,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub due_date: DateTime<Utc>,

    #[validate(range(min = 1, message = "Max score must be at least 1"))]
    pub max_score: i64,
}

/// POST /api/assignments
///
/// Create an assignment in a course the calling teacher owns.
///
/// ### Request Body
/// ```json
/// {
///   "course_id": 1,
///   "title": "Essay: The Water Cycle",
///   "description": "Explain each stage with an example",
///   "due_date": "2025-10-14T23:59:00Z",
///   "max_score": 100
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the assignment
/// - `400 Bad Request` (validation failure)
/// - `403 Forbidden` (caller is not a teacher)
/// - `404 Not Found` (`"Course not found"`, also returned for courses owned by another teacher)
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateAssignmentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AssignmentResponse>::error(error_message)),
        );
    }

    let params = CreateAssignment {
        course_id: req.course_id,
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        max_score: req.max_score,
    };

    match AssignmentService::create(app_state.db(), user.id, params).await {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment created successfully",
            )),
        ),
        Err(e) => service_error(e),
    }
}

use crate::response::{ApiResponse, Empty};
use crate::routes::common::{CourseResponse, service_error};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::user::Model as User;
use serde::Deserialize;
use services::course_service::{CourseService, CreateCourse};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Subject must be between 1 and 100 characters"))]
    pub subject: String,
}

/// POST /api/courses
///
/// Create a course owned by the calling teacher.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Algebra I",
///   "description": "Linear equations and inequalities",
///   "subject": "Mathematics"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the new course
/// - `400 Bad Request` (validation failure)
/// - `403 Forbidden` (`"Only teachers can perform this action"`)
pub async fn create_course(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateCourseRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<CourseResponse>::error(error_message)),
        );
    }

    let params = CreateCourse {
        title: req.title,
        description: req.description,
        subject: req.subject,
    };

    match CourseService::create(app_state.db(), user.id, params).await {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course created successfully",
            )),
        ),
        Err(e) => service_error(e),
    }
}

/// POST /api/courses/{course_id}/enroll
///
/// ### Responses
/// - `201 Created` (`"Enrolled successfully"`)
/// - `400 Bad Request` (`"Already enrolled"`)
/// - `404 Not Found` (`"Course not found"`)
pub async fn enroll(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match CourseService::enroll(app_state.db(), course_id, user.id).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(Empty::default(), "Enrolled successfully")),
        ),
        Err(e) => service_error(e),
    }
}

use crate::response::ApiResponse;
use crate::routes::common::{CourseResponse, service_error};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::Model as User;
use serde::Serialize;
use services::course_service::CourseService;
use util::state::AppState;

#[derive(Debug, Serialize, Default)]
pub struct EnrollmentStatus {
    pub enrolled: bool,
}

/// GET /api/courses
///
/// Teachers receive the courses they teach; students receive the courses
/// they are enrolled in.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "title": "Algebra I",
///       "description": "Linear equations and inequalities",
///       "subject": "Mathematics",
///       "teacher_id": 3,
///       "created_at": "2025-10-01T08:00:00+00:00"
///     }
///   ],
///   "message": "Courses retrieved successfully"
/// }
/// ```
pub async fn get_courses(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    match CourseService::list_for_user(app_state.db(), &user).await {
        Ok(courses) => {
            let data: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Courses retrieved successfully")),
            )
        }
        Err(e) => service_error(e),
    }
}

/// GET /api/courses/browse
///
/// Every course on the platform, for students looking for something to join.
pub async fn browse_courses(State(app_state): State<AppState>) -> impl IntoResponse {
    match CourseService::browse(app_state.db()).await {
        Ok(courses) => {
            let data: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Courses retrieved successfully")),
            )
        }
        Err(e) => service_error(e),
    }
}

/// GET /api/courses/{course_id}
///
/// ### Responses
/// - `200 OK` with the course
/// - `404 Not Found` (`"Course not found"`)
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match CourseService::get(app_state.db(), course_id).await {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course retrieved successfully",
            )),
        ),
        Err(e) => service_error(e),
    }
}

/// GET /api/courses/{course_id}/enrollment-status
///
/// Always `false` for teachers.
///
/// ### Response: 200 OK
/// ```json
/// { "success": true, "data": { "enrolled": true }, "message": "Enrollment status retrieved" }
/// ```
pub async fn get_enrollment_status(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match CourseService::is_enrolled(app_state.db(), course_id, &user).await {
        Ok(enrolled) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EnrollmentStatus { enrolled },
                "Enrollment status retrieved",
            )),
        ),
        Err(e) => service_error(e),
    }
}

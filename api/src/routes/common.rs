use crate::response::ApiResponse;
use axum::{Json, http::StatusCode};
use db::models::{assignment, course, grade, submission, user};
use serde::{Deserialize, Serialize};
use services::ServiceError;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub created_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role.to_string(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub teacher_id: i64,
    pub created_at: String,
}

impl From<course::Model> for CourseResponse {
    fn from(course: course::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            subject: course.subject,
            teacher_id: course.teacher_id,
            created_at: course.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AssignmentResponse {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub max_score: i64,
    pub created_at: String,
}

impl From<assignment::Model> for AssignmentResponse {
    fn from(a: assignment::Model) -> Self {
        Self {
            id: a.id,
            course_id: a.course_id,
            title: a.title,
            description: a.description,
            due_date: a.due_date.to_rfc3339(),
            max_score: a.max_score,
            created_at: a.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SubmissionResponse {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub submitted_at: String,
    pub grade: Option<f64>,
}

impl From<submission::Model> for SubmissionResponse {
    fn from(s: submission::Model) -> Self {
        Self {
            id: s.id,
            assignment_id: s.assignment_id,
            student_id: s.student_id,
            content: s.content,
            submitted_at: s.submitted_at.to_rfc3339(),
            grade: s.grade,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct GradeResponse {
    pub id: i64,
    pub submission_id: i64,
    pub score: f64,
    pub feedback: String,
    pub graded_at: String,
}

impl From<grade::Model> for GradeResponse {
    fn from(g: grade::Model) -> Self {
        Self {
            id: g.id,
            submission_id: g.submission_id,
            score: g.score,
            feedback: g.feedback,
            graded_at: g.graded_at.to_rfc3339(),
        }
    }
}

/// Maps a `ServiceError` onto a status code and an error envelope.
///
/// Storage and internal failures are logged and reported with a generic message.
pub fn service_error<T>(err: ServiceError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let status = match &err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ServiceError::Database(_) | ServiceError::Marker(_) | ServiceError::PasswordHash(_) => {
            tracing::error!(error = %err, "Request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    };

    (status, Json(ApiResponse::error(err.to_string())))
}

use crate::response::ApiResponse;
use crate::routes::common::UserResponse;
use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use db::models::user::Model as User;

/// GET /api/auth/me
///
/// Returns the authenticated user's profile.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 42,
///     "email": "teacher@school.edu",
///     "full_name": "Ada Lovelace",
///     "role": "teacher",
///     "created_at": "2025-10-01T08:00:00+00:00"
///   },
///   "message": "User data retrieved successfully"
/// }
/// ```
///
/// ### Response: 401 Unauthorized
/// Missing, invalid or expired token.
pub async fn get_me(Extension(user): Extension<User>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            UserResponse::from(user),
            "User data retrieved successfully",
        )),
    )
}

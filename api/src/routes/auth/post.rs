use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::routes::common::{UserResponse, service_error};
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::user::{Model as User, Role};
use serde::{Deserialize, Serialize};
use services::user_service::{CreateUser, UserService};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be between 1 and 100 characters"))]
    pub full_name: String,

    pub role: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// OAuth2 password-flow form body. `username` carries the email address.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

fn issue_auth_response(
    state: &AppState,
    user: User,
) -> Result<AuthResponse, (StatusCode, Json<ApiResponse<AuthResponse>>)> {
    let (token, expires_at) = generate_jwt(state, user.id, user.role).map_err(|e| {
        tracing::error!(error = %e, user_id = user.id, "Token encoding failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Internal server error")),
        )
    })?;

    Ok(AuthResponse {
        user: UserResponse::from(user),
        token,
        expires_at,
    })
}

/// POST /api/auth/register
///
/// Register a new teacher or student account.
///
/// ### Request Body
/// ```json
/// {
///   "email": "student@school.edu",
///   "password": "strongpassword",
///   "full_name": "Alan Turing",
///   "role": "student"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "email": "student@school.edu",
///     "full_name": "Alan Turing",
///     "role": "student",
///     "created_at": "2025-10-01T08:00:00+00:00",
///     "token": "jwt_token_here",
///     "expires_at": "2025-10-01T08:30:00+00:00"
///   },
///   "message": "User registered successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure or unknown role)
/// - `409 Conflict` (email already registered)
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(error_message)),
        );
    }

    let role = match req.role.parse::<Role>() {
        Ok(role) => role,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("Role must be either 'teacher' or 'student'")),
            );
        }
    };

    let params = CreateUser {
        email: req.email,
        password: req.password,
        full_name: req.full_name,
        role,
    };

    let user = match UserService::register(app_state.db(), params).await {
        Ok(user) => user,
        Err(e) => return service_error(e),
    };

    match issue_auth_response(&app_state, user) {
        Ok(data) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(data, "User registered successfully")),
        ),
        Err(err) => err,
    }
}

/// POST /api/auth/login
///
/// Authenticate with email and password.
///
/// ### Request Body
/// ```json
/// { "email": "student@school.edu", "password": "strongpassword" }
/// ```
///
/// ### Responses
/// - `200 OK` with the same payload as `register`
/// - `400 Bad Request` (validation failure)
/// - `401 Unauthorized` (`"Incorrect email or password"`)
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(error_message)),
        );
    }

    let user = match UserService::verify_credentials(app_state.db(), &req.email, &req.password).await {
        Ok(user) => user,
        Err(e) => return service_error(e),
    };

    match issue_auth_response(&app_state, user) {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, "Login successful")),
        ),
        Err(err) => err,
    }
}

/// POST /api/auth/token
///
/// OAuth2 password flow for clients that expect the bare token shape rather
/// than the usual envelope. Accepts `application/x-www-form-urlencoded`
/// `username` and `password` fields.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "access_token": "jwt_token_here",
///   "token_type": "bearer",
///   "user": { "id": 1, "email": "student@school.edu", "full_name": "Alan Turing", "role": "student", "created_at": "..." }
/// }
/// ```
///
/// ### Response: 401 Unauthorized
/// Wrong email or password, wrapped in the standard envelope.
pub async fn issue_token(
    State(app_state): State<AppState>,
    Form(req): Form<TokenRequest>,
) -> Response {
    let user = match UserService::verify_credentials(app_state.db(), &req.username, &req.password).await {
        Ok(user) => user,
        Err(e) => return service_error::<AuthResponse>(e).into_response(),
    };

    match issue_auth_response(&app_state, user) {
        Ok(auth) => Json(TokenResponse {
            access_token: auth.token,
            token_type: "bearer".into(),
            user: auth.user,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

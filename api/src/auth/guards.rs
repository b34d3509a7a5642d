use crate::auth::claims::AuthUser;
use crate::auth::extractors::unauthorized;
use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::{Model as User, Role};
use services::{ServiceError, user_service::UserService};
use util::state::AppState;

type GuardError = (StatusCode, Json<ApiResponse<Empty>>);

/// Validates the bearer token, loads the user it names and stores both
/// `AuthUser` and the `User` model in the request extensions.
///
/// Tokens for users that no longer exist are rejected like invalid tokens.
async fn authenticate(state: &AppState, req: Request<Body>) -> Result<(Request<Body>, User), GuardError> {
    let (mut parts, body) = req.into_parts();
    let auth = AuthUser::from_request_parts(&mut parts, state).await?;

    let user = match UserService::find_by_id(state.db(), auth.0.sub).await {
        Ok(user) => user,
        Err(ServiceError::NotFound(_)) => return Err(unauthorized()),
        Err(e) => {
            tracing::error!(error = %e, user_id = auth.0.sub, "Failed to load authenticated user");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            ));
        }
    };

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

async fn require_role(
    state: &AppState,
    req: Request<Body>,
    next: Next,
    role: Role,
    failure_msg: &str,
) -> Result<Response, GuardError> {
    let (req, user) = authenticate(state, req).await?;

    if user.role != role {
        return Err((StatusCode::FORBIDDEN, Json(ApiResponse::error(failure_msg))));
    }

    Ok(next.run(req).await)
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, GuardError> {
    let (req, _user) = authenticate(&state, req).await?;
    Ok(next.run(req).await)
}

/// Teacher-only guard.
pub async fn require_teacher(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, GuardError> {
    require_role(&state, req, next, Role::Teacher, "Only teachers can perform this action").await
}

/// Student-only guard.
pub async fn require_student(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, GuardError> {
    require_role(&state, req, next, Role::Student, "Only students can perform this action").await
}

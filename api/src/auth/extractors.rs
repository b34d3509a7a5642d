use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, Validation, decode};
use util::state::AppState;

use crate::auth::claims::{AuthUser, Claims};
use crate::response::{ApiResponse, Empty};

pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Implements extraction of `AuthUser` from request headers.
///
/// Checks for a Bearer token in the `Authorization` header and verifies it
/// with the decoding key held in `AppState`.
///
/// # Errors
/// - Returns `401 Unauthorized` if the header is missing, malformed, or the token is invalid or expired.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = (StatusCode, Json<ApiResponse<Empty>>);

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| unauthorized())?;

        let token_data = decode::<Claims>(
            bearer.token(),
            state.decoding_key(),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| unauthorized())?;

        Ok(AuthUser(token_data.claims))
    }
}

pub fn unauthorized() -> (StatusCode, Json<ApiResponse<Empty>>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::error(INVALID_CREDENTIALS)),
    )
}

pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use db::models::user::Role;
use jsonwebtoken::{Header, encode};
use util::state::AppState;

/// Generates a JWT and its RFC 3339 expiry timestamp for a given user.
///
/// The token lifetime comes from `jwt_duration_minutes` in the running config.
pub fn generate_jwt(
    state: &AppState,
    user_id: i64,
    role: Role,
) -> Result<(String, String), jsonwebtoken::errors::Error> {
    let expiry = Utc::now() + Duration::minutes(state.jwt_duration_minutes());

    let claims = Claims {
        sub: user_id,
        role,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(&Header::default(), &claims, state.encoding_key())?;
    Ok((token, expiry.to_rfc3339()))
}

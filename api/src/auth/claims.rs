use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// JWT payload: the user id, their role at issue time, and the expiry as a unix timestamp.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub role: Role,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

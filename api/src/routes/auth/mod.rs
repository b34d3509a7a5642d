//! # auth Routes Module
//!
//! Defines and wires up routes for the `/auth` endpoint group.
//!
//! ## Structure
//! - `post.rs` — POST handlers (register, login, OAuth2 token)
//! - `get.rs` — GET handlers (current user info)

pub mod get;
pub mod post;

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use get::get_me;
use post::{issue_token, login, register};

/// Builds the `/auth` route group.
///
/// - `POST /auth/register` → `register`
/// - `POST /auth/login` → `login`
/// - `POST /auth/token` → `issue_token` (form-encoded OAuth2 password flow)
/// - `GET /auth/me` → `get_me` (authenticated)
pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/token", post(issue_token))
        .route(
            "/me",
            get(get_me).route_layer(from_fn_with_state(app_state, allow_authenticated)),
        )
}

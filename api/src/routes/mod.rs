//! HTTP route entry point.
//!
//! Route groups under `/api`:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Registration, login and token issuing (public), current user (authenticated)
//! - `/courses` → Course creation, listing and enrollment
//! - `/assignments` → Assignment creation and lookup
//! - `/submissions` → Auto-graded submissions and grade history
//! - `/ai` → Learning recommendations for students
//! - `/cors-check` → The CORS configuration the server is running with (public)
//!
//! `GET /` sits outside `/api` and describes the service.

use crate::auth::middleware::log_request;
use crate::response::ApiResponse;
use crate::routes::{
    ai::ai_routes, assignments::assignment_routes, auth::auth_routes, courses::course_routes,
    health::health_routes, submissions::submission_routes,
};
use axum::{
    Json, Router,
    extract::State,
    http::HeaderValue,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use util::{config::AppConfig, state::AppState};

pub mod ai;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod courses;
pub mod health;
pub mod submissions;

/// Preview deployments and local dev servers on any port.
static ORIGIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https://.*\.vercel\.app|http://localhost:\d+)$").expect("valid origin pattern")
});

/// Builds the `/api` router with every route group mounted.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes(app_state.clone()))
        .nest("/courses", course_routes(app_state.clone()))
        .nest("/assignments", assignment_routes(app_state.clone()))
        .nest("/submissions", submission_routes(app_state.clone()))
        .nest("/ai", ai_routes(app_state))
        .route("/cors-check", get(cors_check))
}

/// Builds the complete application: root endpoint, `/api` routes, request
/// logging and CORS, with `app_state` attached.
pub fn build_app(app_state: AppState) -> Router {
    let cors = cors_layer(app_state.config());

    Router::new()
        .route("/", get(root))
        .nest("/api", routes(app_state.clone()))
        .layer(from_fn_with_state(app_state.clone(), log_request))
        .layer(cors)
        .with_state(app_state)
}

/// CORS policy: the configured origins plus any origin matching [`ORIGIN_PATTERN`].
/// Credentials are allowed, so methods and headers mirror the request.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let allowed = config.cors_origins.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts| {
                origin
                    .to_str()
                    .map(|o| is_allowed_origin(&allowed, o))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn is_allowed_origin(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|a| a == origin) || ORIGIN_PATTERN.is_match(origin)
}

/// GET /
///
/// ```json
/// { "message": "K-12 LMS API", "version": "1.0.0", "docs": "/docs" }
/// ```
async fn root(State(app_state): State<AppState>) -> impl IntoResponse {
    let config = app_state.config();
    Json(json!({
        "message": config.project_name,
        "version": config.version,
        "docs": "/docs",
    }))
}

#[derive(Debug, Serialize)]
pub struct CorsCheckResponse {
    pub cors_origins: Vec<String>,
    pub cors_origins_count: usize,
    pub environment: String,
}

/// GET /api/cors-check
///
/// Reports the configured origins and environment, for debugging deployments.
/// Origins matching the preview pattern are accepted in addition to these.
async fn cors_check(State(app_state): State<AppState>) -> impl IntoResponse {
    let config = app_state.config();
    let response = CorsCheckResponse {
        cors_origins: config.cors_origins.clone(),
        cors_origins_count: config.cors_origins.len(),
        environment: config.env.clone(),
    };
    Json(ApiResponse::success(response, "CORS configuration"))
}

#[cfg(test)]
mod tests {
    use super::is_allowed_origin;

    #[test]
    fn origin_matching() {
        let allowed = vec!["https://lms.school.edu".to_string()];

        assert!(is_allowed_origin(&allowed, "https://lms.school.edu"));
        assert!(is_allowed_origin(&allowed, "https://preview-123.vercel.app"));
        assert!(is_allowed_origin(&allowed, "http://localhost:5173"));

        assert!(!is_allowed_origin(&allowed, "http://localhost"));
        assert!(!is_allowed_origin(&allowed, "http://preview.vercel.app"));
        assert!(!is_allowed_origin(&allowed, "https://evil.com"));
        assert!(!is_allowed_origin(&allowed, "https://lms.school.edu.evil.com"));
    }
}

#![allow(dead_code)]

use api::auth::generate_jwt;
use api::routes::build_app;
use axum::{
    Router,
    body::Body,
    http::{Request, header::{AUTHORIZATION, CONTENT_TYPE}},
    response::Response,
};
use db::models::user::{Model as User, Role};
use db::test_utils::setup_test_db;
use serde_json::Value;
use util::{config::AppConfig, state::AppState};

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Fresh in-memory database, test config and the fully layered router.
pub async fn make_test_app() -> TestApp {
    let db = setup_test_db().await;
    let state = AppState::new(db, AppConfig::for_tests());
    let router = build_app(state.clone());
    TestApp { router, state }
}

/// Inserts a user directly and returns it with a valid bearer token.
pub async fn create_user(state: &AppState, email: &str, role: Role) -> (User, String) {
    let user = User::create(state.db(), email, "unused-hash", email, role)
        .await
        .expect("Failed to create user");
    let (token, _) = generate_jwt(state, user.id, user.role).expect("Failed to generate token");
    (user, token)
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

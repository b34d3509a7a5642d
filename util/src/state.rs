//! Application state container shared across Axum route handlers and services.

use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Central application state shared across the server.
///
/// Holds the database connection, the configuration the server was started
/// with, and the JWT keys derived from `jwt_secret`. Cloning is cheap: the
/// connection is a pool handle and everything else sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    inner: Arc<Inner>,
}

struct Inner {
    config: AppConfig,
    jwt_encoding_key: EncodingKey,
    jwt_decoding_key: DecodingKey,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        let inner = Inner {
            jwt_encoding_key: EncodingKey::from_secret(secret),
            jwt_decoding_key: DecodingKey::from_secret(secret),
            config,
        };

        Self {
            db,
            inner: Arc::new(inner),
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.inner.jwt_encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.inner.jwt_decoding_key
    }

    pub fn jwt_duration_minutes(&self) -> i64 {
        self.inner.config.jwt_duration_minutes
    }
}

pub mod models;
pub mod test_utils;

use migration::database_url::{ensure_parent_dir, normalize_database_url, sqlite_file_path};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Opens a connection to the database behind `url`.
///
/// Accepts either a full DSN (`sqlite:...`, `postgres://...`) or a bare SQLite
/// file path. For file-backed SQLite the parent directory is created first,
/// since SQLite will not create intermediate directories itself.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let dsn = normalize_database_url(url);

    if let Some(path) = sqlite_file_path(&dsn) {
        if let Err(e) = ensure_parent_dir(path) {
            tracing::warn!(path, error = %e, "Could not create database directory");
        }
    }

    tracing::info!(url = %dsn, "Connecting to database");
    Database::connect(&dsn).await
}

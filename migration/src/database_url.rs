//! `DATABASE_URL` handling shared by the `migration` binary and `db::connect`.

use std::{fs, io, path::Path};

/// Turns a configured database URL into a DSN sea-orm accepts.
///
/// Anything that already names a scheme is returned as is. A bare path is
/// treated as a SQLite file that may be created.
pub fn normalize_database_url(url: &str) -> String {
    if url.starts_with("sqlite:") || url.contains("://") {
        url.to_string()
    } else {
        format!("sqlite://{url}?mode=rwc")
    }
}

/// On-disk path of a file-backed SQLite DSN. `None` for in-memory databases
/// and other backends.
pub fn sqlite_file_path(dsn: &str) -> Option<&str> {
    let rest = dsn
        .strip_prefix("sqlite://")
        .or_else(|| dsn.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    (!path.is_empty() && !path.contains(":memory:")).then_some(path)
}

/// Creates the directory that will hold the SQLite file at `path`.
pub fn ensure_parent_dir(path: &str) -> io::Result<()> {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_paths_become_sqlite_dsns() {
        assert_eq!(normalize_database_url("data/lms.db"), "sqlite://data/lms.db?mode=rwc");
        assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(normalize_database_url("sqlite:lms.db"), "sqlite:lms.db");
        assert_eq!(
            normalize_database_url("postgres://localhost/lms"),
            "postgres://localhost/lms"
        );
    }

    #[test]
    fn extracts_file_path_from_dsn() {
        assert_eq!(sqlite_file_path("sqlite://data/lms.db?mode=rwc"), Some("data/lms.db"));
        assert_eq!(sqlite_file_path("sqlite:///tmp/lms.db"), Some("/tmp/lms.db"));
        assert_eq!(sqlite_file_path("sqlite:data/lms.db"), Some("data/lms.db"));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("sqlite://:memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/lms"), None);
    }

    #[test]
    fn bare_path_round_trips_to_its_file() {
        let dsn = normalize_database_url("data/lms.db");
        assert_eq!(sqlite_file_path(&dsn), Some("data/lms.db"));
    }

    #[test]
    fn file_in_working_directory_needs_no_directory() {
        assert!(ensure_parent_dir("lms.db").is_ok());
    }
}

use migration::database_url::{ensure_parent_dir, normalize_database_url, sqlite_file_path};
use std::{env, fs, path::Path};

mod runner;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/lms.db?mode=rwc";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let url = normalize_database_url(
        &env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
    );
    let db_path = sqlite_file_path(&url);
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            if let Some(path) = db_path {
                remove_db_file(path);
            }
        }
        Some("fresh") => {
            if let Some(path) = db_path {
                remove_db_file(path);
                create_db_dir(path);
            }
            runner::run_all_migrations(&url).await;
        }
        _ => {
            if let Some(path) = db_path {
                create_db_dir(path);
            }
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(path: &str) {
    ensure_parent_dir(path).expect("Failed to create DB directory");
}

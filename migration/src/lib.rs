pub mod database_url;
pub mod migrations;
mod migrator;

pub use migrator::Migrator;

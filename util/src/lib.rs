//! Shared runtime plumbing: explicit configuration and the application state
//! handed to every request handler.

pub mod config;
pub mod state;

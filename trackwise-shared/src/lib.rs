//! # Trackwise Shared Library
//!
//! Storage layer shared by the Trackwise API server and its admin CLI.
//!
//! ## Module Organization
//!
//! - `models`: Records, repository traits and their SQLite implementations
//! - `db`: Connection pool and schema migrations
//! - `auth`: Credential hashing
//! - `error`: Storage error taxonomy

pub mod auth;
pub mod db;
pub mod error;
pub mod models;

/// Current version of the Trackwise shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

/// API route handlers
///
/// Organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Credential check
/// - `users`: User accounts
/// - `tasks`: Task list with archive
/// - `inventory`: Inventory items
///
/// Each handler validates its input, performs one repository call and shapes
/// the JSON response. Wire types live next to their handlers so the stored
/// records never serialize directly.

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod health;
pub mod inventory;
pub mod tasks;
pub mod users;

/// Body returned by successful deletes
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

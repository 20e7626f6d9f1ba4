//! Directory API handlers
//!
//! The user listing is a bare JSON array with no envelope or count, unlike
//! the catalog endpoints. Clients of the directory service rely on that.

use crate::state::{Directory, User};
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// Shared, read-only user directory
pub type SharedDirectory = Arc<Directory>;

/// Plain-text greeting served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the User Directory API!";

/// GET / - Welcome message
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// GET /users - Every user, in directory order
pub async fn list_users(State(directory): State<SharedDirectory>) -> Json<Vec<User>> {
    Json(directory.users().to_vec())
}

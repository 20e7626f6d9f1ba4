// User directory
// Immutable user collection served by the directory service

use serde::{Deserialize, Serialize};

/// Unique identifier for a user
pub type UserId = i64;

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: UserId,
    /// Display name
    pub name: String,
}

/// Read-only user collection, shared behind an `Arc`
#[derive(Debug, Clone)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Create a directory from an ordered list of users
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory holding the built-in seed list
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// All users in original order
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

/// The fixed user list the directory service starts with
pub fn seed_users() -> Vec<User> {
    [(1, "John Doe"), (2, "Jane Smith"), (3, "Alice Johnson")]
        .into_iter()
        .map(|(id, name)| User {
            id,
            name: name.to_string(),
        })
        .collect()
}

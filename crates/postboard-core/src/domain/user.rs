use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - a registered account.
///
/// `password` is kept exactly as submitted; it is never hashed and never
/// leaves the server in a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// A user that has not been persisted yet. The id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Create a new user stamped with the current time.
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            username,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}

//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional so that an absent field reaches the handler as
//! `None` and is reported as a missing field rather than a JSON parse error.

use serde::{Deserialize, Serialize};

/// Request to create a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A user's public information. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// A post together with its owner's id and username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub user_id: i32,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_deserialize_as_none() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"username": "alice", "email": null}"#).unwrap();

        assert_eq!(req.username.as_deref(), Some("alice"));
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_post_request_reads_numeric_user_id() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"user_id": 7, "title": "t", "content": "c"}"#).unwrap();
        assert_eq!(req.user_id, Some(7));
    }
}

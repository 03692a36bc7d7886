use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, PostWithAuthor, User};
use crate::error::RepoError;

/// Generic repository trait shared by every entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Insert a user and return the stored row.
    ///
    /// Fails with [`RepoError::Constraint`] when the username or email is taken.
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// All posts with their owner, most recent first.
    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepoError>;

    async fn find_with_author(&self, id: i32) -> Result<Option<PostWithAuthor>, RepoError>;

    /// Insert a post and return it joined with its owner.
    ///
    /// The caller is expected to have checked that `post.user_id` exists.
    async fn create(&self, post: NewPost) -> Result<PostWithAuthor, RepoError>;
}

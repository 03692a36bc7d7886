//! SQLite repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use postboard_core::domain::{NewPost, NewUser, PostWithAuthor, User};
use postboard_core::error::RepoError;
use postboard_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sqlite_base::{SqliteBaseRepository, into_repo_error};

/// SQLite user repository.
pub type SqliteUserRepository = SqliteBaseRepository<UserEntity>;

/// SQLite post repository.
pub type SqlitePostRepository = SqliteBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let rows = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(into_repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        tracing::debug!(username = %new_user.username, "Inserting user");

        let inserted = UserEntity::insert(user::ActiveModel::from(new_user))
            .exec(&self.db)
            .await
            .map_err(into_repo_error)?;

        UserEntity::find_by_id(inserted.last_insert_id)
            .one(&self.db)
            .await
            .map_err(into_repo_error)?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }
}

/// Flat row produced by joining `posts` with `users`.
#[derive(Debug, FromQueryResult)]
struct PostWithAuthorRow {
    id: i32,
    user_id: i32,
    username: String,
    title: String,
    content: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PostWithAuthorRow> for PostWithAuthor {
    fn from(row: PostWithAuthorRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            username: row.username,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

/// `SELECT posts.*, users.username FROM posts JOIN users ON users.id = posts.user_id`
fn select_with_author() -> Select<PostEntity> {
    PostEntity::find()
        .join(JoinType::InnerJoin, post::Relation::User.def())
        .column_as(user::Column::Username, "username")
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        // Timestamps can collide; id breaks the tie so newer rows still come first.
        let rows = select_with_author()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .into_model::<PostWithAuthorRow>()
            .all(&self.db)
            .await
            .map_err(into_repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_with_author(&self, id: i32) -> Result<Option<PostWithAuthor>, RepoError> {
        let row = select_with_author()
            .filter(post::Column::Id.eq(id))
            .into_model::<PostWithAuthorRow>()
            .one(&self.db)
            .await
            .map_err(into_repo_error)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_post: NewPost) -> Result<PostWithAuthor, RepoError> {
        tracing::debug!(user_id = new_post.user_id, "Inserting post");

        let inserted = PostEntity::insert(post::ActiveModel::from(new_post))
            .exec(&self.db)
            .await
            .map_err(into_repo_error)?;

        self.find_with_author(inserted.last_insert_id)
            .await?
            .ok_or(RepoError::NotFound)
    }
}

//! Post handlers.

use actix_web::{HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::{NewPost, PostWithAuthor, User};
use postboard_core::ports::BaseRepository;
use postboard_shared::dto::{CreatePostRequest, PostResponse};

use super::{MISSING_FIELDS, required};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: PostWithAuthor) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
        user_id: post.user_id,
        username: post.username,
    }
}

/// GET /api/posts - newest first.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_with_authors().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
///
/// 400 "Missing required fields" when a field is absent, null or empty;
/// 404 "User not found" when `user_id` has no matching user.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(user_id), Some(title), Some(content)) =
        (req.user_id, required(req.title), required(req.content))
    else {
        return Err(DomainError::Validation(MISSING_FIELDS.to_string()).into());
    };

    let owner: Option<User> = state.users.find_by_id(user_id).await?;
    if owner.is_none() {
        tracing::debug!(user_id, "Post rejected: unknown user");
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let post = state
        .posts
        .create(NewPost::new(user_id, title, content))
        .await?;

    tracing::info!(post_id = post.id, user_id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

//! User handlers.

use actix_web::{HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::{NewUser, User};
use postboard_core::error::RepoError;
use postboard_shared::dto::{CreateUserRequest, UserResponse};

use super::{MISSING_FIELDS, required};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
    }
}

/// GET /api/users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let body: Vec<UserResponse> = users.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
///
/// 400 "Missing required fields" when a field is absent, null or empty.
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(username), Some(email), Some(password)) = (
        required(req.username),
        required(req.email),
        required(req.password),
    ) else {
        return Err(DomainError::Validation(MISSING_FIELDS.to_string()).into());
    };

    // Uniqueness is enforced by the store, not checked up front.
    let user = state
        .users
        .create(NewUser::new(username, email, password))
        .await
        .map_err(|e| match e {
            RepoError::Constraint(_) => {
                AppError::Conflict("Username or email already exists".to_string())
            }
            other => other.into(),
        })?;

    tracing::info!(user_id = user.id, "User created");
    Ok(HttpResponse::Created().json(to_response(user)))
}

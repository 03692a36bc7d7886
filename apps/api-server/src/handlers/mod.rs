//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Detail sent when a create request lacks one of its fields.
pub(crate) const MISSING_FIELDS: &str = "Missing required fields";

/// A field counts as present only when it is non-null and non-empty.
///
/// Bodies that fail to decode at all (bad JSON, wrong content type, or a field
/// of the wrong type such as `"user_id": "1"`) never reach this check; they are
/// answered by [`json_error_handler`] with a 400 whose detail starts with
/// [`INVALID_BODY`](crate::middleware::error::INVALID_BODY).
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::resource("/users")
                        .route(web::get().to(users::list_users))
                        .route(web::post().to(users::create_user)),
                )
                .service(
                    web::resource("/posts")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                ),
        );
}

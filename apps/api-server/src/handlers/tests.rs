use actix_web::{App, http::StatusCode, test, web};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database};
use serde_json::{Value, json};

use postboard_infra::DatabasePool;

use super::configure_routes;
use crate::middleware::error::INVALID_BODY;
use crate::state::AppState;

async fn memory_state() -> AppState {
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    AppState::new(DatabasePool::from_conn(db))
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(memory_state().await))
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {
        test::call_service(
            &$app,
            test::TestRequest::post()
                .uri($uri)
                .set_json($body)
                .to_request(),
        )
        .await
    };
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let resp =
            test::call_service(&$app, test::TestRequest::get().uri($uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

fn user_body(name: &str) -> Value {
    json!({
        "username": name,
        "email": format!("{name}@example.com"),
        "password": "secret",
    })
}

#[actix_web::test]
async fn test_create_user_returns_created_without_password() {
    let app = init_app!();

    let resp = post_json!(app, "/api/users", user_body("alice"));
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body["created_at"].is_string());
    assert!(body.get("password").is_none());
}

#[actix_web::test]
async fn test_duplicate_username_or_email_conflicts() {
    let app = init_app!();

    let resp = post_json!(app, "/api/users", user_body("alice"));
    assert_eq!(resp.status(), StatusCode::CREATED);

    let same_name = json!({"username": "alice", "email": "x@example.com", "password": "pw"});
    let resp = post_json!(app, "/api/users", same_name);
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Username or email already exists");

    let same_email = json!({"username": "bob", "email": "alice@example.com", "password": "pw"});
    let resp = post_json!(app, "/api/users", same_email);
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let users = get_json!(app, "/api/users");
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_user_missing_fields_is_bad_request() {
    let app = init_app!();

    let cases = [
        json!({"email": "a@example.com", "password": "pw"}),
        json!({"username": "a", "password": "pw"}),
        json!({"username": "a", "email": "a@example.com"}),
        json!({"username": "", "email": "a@example.com", "password": "pw"}),
        json!({"username": "a", "email": null, "password": "pw"}),
        json!({}),
    ];

    for case in cases {
        let resp = post_json!(app, "/api/users", case);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Missing required fields");
    }

    let users = get_json!(app, "/api/users");
    assert!(users.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert!(body["detail"].as_str().unwrap().starts_with(INVALID_BODY));
}

#[actix_web::test]
async fn test_list_users_in_insertion_order() {
    let app = init_app!();

    post_json!(app, "/api/users", user_body("u1"));
    post_json!(app, "/api/users", user_body("u2"));

    let users = get_json!(app, "/api/users");
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "u1");
    assert_eq!(users[1]["username"], "u2");
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[actix_web::test]
async fn test_create_post_for_unknown_user_is_not_found() {
    let app = init_app!();

    let resp = post_json!(
        app,
        "/api/posts",
        json!({"user_id": 9999, "title": "t", "content": "c"})
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "User not found");
    assert_eq!(body["status"], 404);

    let posts = get_json!(app, "/api/posts");
    assert!(posts.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_create_post_missing_fields_is_bad_request() {
    let app = init_app!();

    let resp = post_json!(app, "/api/users", user_body("alice"));
    let user: Value = test::read_body_json(resp).await;
    let user_id = user["id"].as_i64().unwrap();

    for case in [
        json!({"title": "t", "content": "c"}),
        json!({"user_id": user_id, "content": "c"}),
        json!({"user_id": user_id, "title": "t"}),
        json!({"user_id": user_id, "title": "", "content": "c"}),
        json!({"user_id": user_id, "title": "t", "content": ""}),
        json!({"user_id": null, "title": "t", "content": "c"}),
        json!({"user_id": user_id, "title": null, "content": "c"}),
    ] {
        let resp = post_json!(app, "/api/posts", case);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Missing required fields");
    }

    let posts = get_json!(app, "/api/posts");
    assert!(posts.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_wrong_typed_field_is_reported_as_invalid_body() {
    let app = init_app!();

    let resp = post_json!(
        app,
        "/api/posts",
        json!({"user_id": "1", "title": "t", "content": "c"})
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().starts_with(INVALID_BODY));

    let resp = post_json!(
        app,
        "/api/users",
        json!({"username": 5, "email": "a@example.com", "password": "pw"})
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().starts_with(INVALID_BODY));
}

#[actix_web::test]
async fn test_storage_fault_is_internal_error_with_message() {
    let state = memory_state().await;
    state
        .db
        .conn()
        .execute_unprepared("DROP TABLE posts")
        .await
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 500);
    assert!(body["detail"].as_str().unwrap().contains("no such table"));
}

#[actix_web::test]
async fn test_create_post_includes_owner_and_round_trips() {
    let app = init_app!();

    let resp = post_json!(app, "/api/users", user_body("alice"));
    let user: Value = test::read_body_json(resp).await;
    let user_id = user["id"].as_i64().unwrap();

    let resp = post_json!(
        app,
        "/api/posts",
        json!({"user_id": user_id, "title": "Hello", "content": "First post"})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["user_id"], user_id);
    assert_eq!(created["username"], "alice");
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["content"], "First post");
    assert!(created["id"].as_i64().unwrap() > 0);

    let posts = get_json!(app, "/api/posts");
    assert_eq!(posts.as_array().unwrap()[0], created);

    let users = get_json!(app, "/api/users");
    assert_eq!(users.as_array().unwrap()[0], user);
}

#[actix_web::test]
async fn test_list_posts_newest_first() {
    let app = init_app!();

    let resp = post_json!(app, "/api/users", user_body("alice"));
    let user: Value = test::read_body_json(resp).await;

    for title in ["P1", "P2"] {
        let resp = post_json!(
            app,
            "/api/posts",
            json!({"user_id": user["id"], "title": title, "content": "body"})
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let posts = get_json!(app, "/api/posts");
    let titles: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["P2", "P1"]);
}

#[actix_web::test]
async fn test_health_reports_database() {
    let app = init_app!();

    let health = get_json!(app, "/api/health");
    assert_eq!(health["status"], "ok");
    assert_eq!(health["database"], "ok");
}

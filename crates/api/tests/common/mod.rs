#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trivia_api::config::{CorsOrigins, LogFormat, ServerConfig};
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;
use trivia_db::models::question::{CreateQuestion, Question};
use trivia_db::repositories::QuestionRepo;

/// Build a test `ServerConfig` with safe defaults (any origin, 30s timeout).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

/// POST an arbitrary string as `application/json`, valid or not.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_category(pool: &PgPool, kind: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(kind)
        .fetch_one(pool)
        .await
        .unwrap();
    id
}

pub async fn insert_question(pool: &PgPool, text: &str, category: Option<i64>) -> Question {
    let input = CreateQuestion {
        question: Some(text.to_string()),
        answer: Some(format!("answer to {text}")),
        difficulty: Some(3),
        category,
    };
    QuestionRepo::create(pool, &input).await.unwrap()
}

/// Insert `count` questions named `q1..qN` in `category`.
pub async fn insert_questions(pool: &PgPool, count: usize, category: Option<i64>) -> Vec<Question> {
    let mut created = Vec::with_capacity(count);
    for i in 1..=count {
        created.push(insert_question(pool, &format!("q{i}"), category).await);
    }
    created
}

/// Ids of the questions in a response body's `questions` array.
pub fn question_ids(json: &serde_json::Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

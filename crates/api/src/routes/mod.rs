pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                      list categories
/// /categories/{id}/questions       questions in a category
///
/// /questions                       list (GET), create (POST)
/// /questions/{id}                  delete (DELETE)
/// /questions-search                search by text (POST)
///
/// /quizzes                         next unserved quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}

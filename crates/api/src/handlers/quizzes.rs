//! Handler for serving quiz questions without repeats.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::quiz::{category_filter, pick_unserved};
use trivia_db::models::quiz::QuizRequest;
use trivia_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::QuizResponse;
use crate::state::AppState;

/// POST /quizzes
///
/// Pick a random question from the chosen category (id 0 = all) that is not
/// in `previous_questions`. Once none remain the response has no
/// `question` field.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let category_id = input.quiz_category.id;
    let candidates =
        QuestionRepo::list_for_quiz(&state.pool, category_filter(category_id)).await?;

    let question = pick_unserved(
        &candidates,
        &input.previous_questions,
        |q| q.id,
        &mut rand::rng(),
    )
    .cloned();

    match &question {
        Some(q) => tracing::debug!(category_id, question_id = q.id, "Quiz question served"),
        None => tracing::debug!(
            category_id,
            served = input.previous_questions.len(),
            "Quiz exhausted",
        ),
    }

    Ok(Json(QuizResponse::next(question)))
}

//! Handlers for listing, creating, deleting and searching questions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::paginate;
use trivia_core::question::validate_question_text;
use trivia_core::types::DbId;
use trivia_db::models::question::{CreateQuestion, Question, SearchQuestions};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::{category_map, QuestionPage};
use crate::state::AppState;

/// Reload the full question list and cut out the requested page.
///
/// Callers decide how a failure is reported: a read failure on a plain
/// listing is a 500, after a mutation it is a 422.
async fn reload_page(state: &AppState, page: i64) -> Result<(Vec<Question>, usize), sqlx::Error> {
    let selection = QuestionRepo::list_all(&state.pool).await?;
    Ok((paginate(&selection, page).to_vec(), selection.len()))
}

/// GET /questions
///
/// A page of questions with the category map. A page with no questions
/// (empty table or past the end) is a 404.
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let (questions, total) = reload_page(&state, params.page()).await?;

    if questions.is_empty() {
        return Err(CoreError::Empty("questions").into());
    }

    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(
        QuestionPage::new(questions, total).with_categories(category_map(categories)),
    ))
}

/// POST /questions
///
/// Create a question. Empty question or answer text is rejected before
/// anything is written.
pub async fn create_question(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    validate_question_text(input.question.as_deref(), input.answer.as_deref())?;

    let created = QuestionRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::Mutation)?;

    tracing::info!(
        question_id = created.id,
        category = ?created.category,
        "Question created",
    );

    let (questions, total) = reload_page(&state, params.page())
        .await
        .map_err(AppError::Mutation)?;

    Ok(Json(QuestionPage::new(questions, total)))
}

/// DELETE /questions/{id}
///
/// Hard-delete a question and return the refreshed listing.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        })
    };

    // Every storage failure on this route is a 422, reads included.
    QuestionRepo::find_by_id(&state.pool, question_id)
        .await
        .map_err(AppError::Mutation)?
        .ok_or_else(not_found)?;

    let deleted = QuestionRepo::delete(&state.pool, question_id)
        .await
        .map_err(AppError::Mutation)?;

    // Someone else removed it between the lookup and the delete.
    if !deleted {
        return Err(not_found());
    }

    tracing::info!(question_id, "Question deleted");

    let (questions, total) = reload_page(&state, params.page())
        .await
        .map_err(AppError::Mutation)?;

    Ok(Json(
        QuestionPage::new(questions, total).with_deleted(question_id),
    ))
}

/// POST /questions-search
///
/// Case-insensitive substring match on question text. Zero matches is a
/// successful empty page; `total_questions` counts matches only.
pub async fn search_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<SearchQuestions>,
) -> AppResult<impl IntoResponse> {
    let selection = QuestionRepo::search(&state.pool, &input.search_term).await?;

    tracing::debug!(
        term = %input.search_term,
        matches = selection.len(),
        "Question search",
    );

    let questions = paginate(&selection, params.page()).to_vec();

    Ok(Json(QuestionPage::new(questions, selection.len())))
}

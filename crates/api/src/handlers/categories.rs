//! Handlers for categories and per-category question listings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::paginate;
use trivia_core::types::DbId;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::{category_map, CategoriesResponse, QuestionPage};
use crate::state::AppState;

/// GET /categories
///
/// Every category as an `id -> type` map. An empty catalog is a 404.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    if categories.is_empty() {
        return Err(CoreError::Empty("categories").into());
    }

    Ok(Json(CategoriesResponse::new(category_map(categories))))
}

/// GET /categories/{id}/questions
///
/// Paginated questions in one category. Unknown categories produce an
/// empty page, not an error.
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let selection = QuestionRepo::list_by_category(&state.pool, category_id).await?;
    let questions = paginate(&selection, params.page()).to_vec();

    Ok(Json(QuestionPage::new(questions, selection.len())))
}

//! Response envelope types for API handlers.
//!
//! Every successful response carries `success: true` alongside its payload.
//! Use these structs instead of ad-hoc `serde_json::json!` bodies.

use indexmap::IndexMap;
use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::Question;

/// Category id to label, in id order. Serializes as `{"1": "Science", ...}`.
pub type CategoryMap = IndexMap<DbId, String>;

/// Collapse category rows into a [`CategoryMap`], keeping their order.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Body of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// A page of questions plus the total size of the unpaginated selection.
///
/// Shared by listing, search, by-category, create and delete responses;
/// `categories` and `deleted` are only present where those endpoints set
/// them. `current_category` is always `null`.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DbId>,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<DbId>,
}

impl QuestionPage {
    pub fn new(questions: Vec<Question>, total_questions: usize) -> Self {
        Self {
            success: true,
            deleted: None,
            questions,
            total_questions,
            categories: None,
            current_category: None,
        }
    }

    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_deleted(mut self, id: DbId) -> Self {
        self.deleted = Some(id);
        self
    }
}

/// Body of `POST /quizzes`. `question` is omitted once the quiz is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

impl QuizResponse {
    pub fn next(question: Option<Question>) -> Self {
        Self {
            success: true,
            question,
        }
    }
}

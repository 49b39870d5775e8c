//! Payload for requesting the next quiz question.

use serde::Deserialize;
use trivia_core::types::DbId;

use crate::models::lenient::int_or_numeric_string;

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    /// Ids already served in this quiz session.
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
}

/// The category a quiz is drawn from. Id `0` selects every category.
///
/// Clients may send extra fields (such as the category label); only the id
/// is read. Browsers key categories by string, so `"3"` is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub id: DbId,
}

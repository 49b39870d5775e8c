//! Question rows and the payloads that create or search them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::types::DbId;

use crate::models::lenient::opt_int_or_numeric_string;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `questions` table.
///
/// Serializes to the shape clients receive in every question listing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    /// Category id. Not constrained to an existing category.
    pub category: Option<DbId>,
    /// Expected 1-5, never validated.
    pub difficulty: Option<i32>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /questions`.
///
/// Text fields are optional here so that a missing field is reported as a
/// validation failure rather than a malformed body. `difficulty` and
/// `category` accept numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "opt_int_or_numeric_string")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "opt_int_or_numeric_string")]
    pub category: Option<DbId>,
}

/// Body of `POST /questions-search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuestions {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

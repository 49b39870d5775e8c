use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    /// Display label, e.g. "Science".
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

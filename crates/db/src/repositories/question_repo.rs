//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::search::substring_pattern;
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides data access for trivia questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List every question ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List the questions whose `category` equals `category_id`, ordered by id.
    ///
    /// The category itself is not checked for existence.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Questions that are candidates for a quiz round.
    ///
    /// `None` selects every question.
    pub async fn list_for_quiz(
        pool: &PgPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        match category_id {
            Some(id) => Self::list_by_category(pool, id).await,
            None => Self::list_all(pool).await,
        }
    }

    /// Case-insensitive substring search over the question text only.
    ///
    /// The term is matched literally; LIKE wildcards in it are escaped.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(substring_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Find a question by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new question, returning the created row.
    ///
    /// Text fields are expected to be validated by the caller; a missing
    /// text field fails on the NOT NULL constraint.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Hard-delete a question. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `categories` table.
//!
//! Categories are seeded outside this service, so only reads are exposed.

use sqlx::PgPool;

use crate::models::category::Category;

/// Provides data access for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }
}

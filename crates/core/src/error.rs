use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A listing that must not be empty came back empty (no categories,
    /// or a page past the end of the question list).
    #[error("No {0} found")]
    Empty(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),
}

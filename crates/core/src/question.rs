//! Validation for incoming questions.

use crate::error::CoreError;

/// Validate the text fields of a question before it is persisted.
///
/// Both `question` and `answer` must be present and contain at least one
/// non-whitespace character. Difficulty and category are not checked.
pub fn validate_question_text(
    question: Option<&str>,
    answer: Option<&str>,
) -> Result<(), CoreError> {
    require_text("question", question)?;
    require_text("answer", answer)?;
    Ok(())
}

fn require_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!("{field} must not be empty"))),
    }
}

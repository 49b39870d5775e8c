//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trivia_core::pagination::parse_page;

/// `?page=N` on list-returning endpoints.
///
/// Kept as raw text so a non-integer value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested 1-based page number.
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

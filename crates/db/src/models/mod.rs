//! Row models and request DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the `Deserialize` payloads accepted by the API.

pub mod category;
pub mod lenient;
pub mod question;
pub mod quiz;

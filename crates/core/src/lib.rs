//! Domain logic for the trivia service.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and
//! `api` crates build on these helpers.

pub mod error;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod search;
pub mod types;

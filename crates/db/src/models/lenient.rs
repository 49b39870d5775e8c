//! Deserializers for integer fields that browsers may send as strings.
//!
//! HTML form and `<select>` values arrive as text, so `3` and `"3"` are both
//! accepted. Non-numeric text is still rejected.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt<T> {
    Int(T),
    Text(String),
}

fn parse_text<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: de::Error,
{
    text.trim()
        .parse()
        .map_err(|e| E::custom(format!("invalid integer '{text}': {e}")))
}

/// Accept `3` as well as `"3"`.
pub fn int_or_numeric_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match RawInt::<T>::deserialize(deserializer)? {
        RawInt::Int(value) => Ok(value),
        RawInt::Text(text) => parse_text(&text),
    }
}

/// Optional variant of [`int_or_numeric_string`].
///
/// `null` and blank strings become `None`. Pair with `#[serde(default)]` so
/// a missing field is `None` too.
pub fn opt_int_or_numeric_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<RawInt<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawInt::Int(value)) => Ok(Some(value)),
        Some(RawInt::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawInt::Text(text)) => parse_text(&text).map(Some),
    }
}

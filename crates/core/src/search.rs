//! Search helpers.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build a case-insensitive substring pattern for `ILIKE ... ESCAPE '\'`.
///
/// `%`, `_` and the escape character itself are escaped so the term is
/// matched literally. An empty term yields `%%`, which matches everything.
///
/// # Examples
///
/// ```
/// use trivia_core::search::substring_pattern;
/// assert_eq!(substring_pattern("who"), "%who%");
/// assert_eq!(substring_pattern("100%"), "%100\\%%");
/// ```
pub fn substring_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_term_is_wrapped() {
        assert_eq!(substring_pattern("title"), "%title%");
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(substring_pattern(""), "%%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(substring_pattern("a_b%c"), "%a\\_b\\%c%");
    }

    #[test]
    fn escape_character_is_escaped() {
        assert_eq!(substring_pattern("C:\\"), "%C:\\\\%");
    }

    #[test]
    fn case_is_preserved() {
        // Case folding is left to ILIKE.
        assert_eq!(substring_pattern("WhO"), "%WhO%");
    }
}

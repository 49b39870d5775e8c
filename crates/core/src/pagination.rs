//! Fixed-size page windows over an ordered result set.
//!
//! Listings are fetched in full (ordered by id) and sliced here, so the same
//! helper serves every list-returning endpoint.

use std::ops::Range;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the request carries no usable `page` parameter.
pub const DEFAULT_PAGE: i64 = 1;

/// Parse a raw `?page=` value.
///
/// Missing or non-integer input falls back to [`DEFAULT_PAGE`]. Integers are
/// returned as-is, including zero and negatives; [`paginate`] turns those
/// into an empty page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Index range covered by a 1-based `page` of `page_size` items.
///
/// Returns `None` for pages below 1 or when the offset would overflow.
pub fn page_window(page: i64, page_size: usize) -> Option<Range<usize>> {
    if page < 1 {
        return None;
    }
    let start = usize::try_from(page - 1).ok()?.checked_mul(page_size)?;
    let end = start.checked_add(page_size)?;
    Some(start..end)
}

/// Slice `items` to the requested page of [`QUESTIONS_PER_PAGE`] entries.
///
/// A page that starts at or past the end yields an empty slice; the last
/// page may be shorter than a full page.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    match page_window(page, QUESTIONS_PER_PAGE) {
        Some(window) if window.start < items.len() => {
            &items[window.start..window.end.min(items.len())]
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    // -- parse_page ----------------------------------------------------------

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn non_integer_page_defaults_to_first() {
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("2.5")), 1);
        assert_eq!(parse_page(Some("")), 1);
    }

    #[test]
    fn integer_page_is_parsed() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 7 ")), 7);
    }

    #[test]
    fn zero_and_negative_pages_pass_through() {
        assert_eq!(parse_page(Some("0")), 0);
        assert_eq!(parse_page(Some("-2")), -2);
    }

    // -- page_window ---------------------------------------------------------

    #[test]
    fn first_window_starts_at_zero() {
        assert_eq!(page_window(1, 10), Some(0..10));
    }

    #[test]
    fn later_window_is_offset() {
        assert_eq!(page_window(3, 10), Some(20..30));
    }

    #[test]
    fn window_below_one_is_none() {
        assert_eq!(page_window(0, 10), None);
        assert_eq!(page_window(-5, 10), None);
    }

    #[test]
    fn overflowing_window_is_none() {
        assert_eq!(page_window(i64::MAX, QUESTIONS_PER_PAGE), None);
    }

    // -- paginate ------------------------------------------------------------

    #[test]
    fn first_page_holds_ten_items() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 1), &items[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 3), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_exactly_at_end_is_empty() {
        let items = numbers(20);
        assert!(paginate(&items, 3).is_empty());
    }

    #[test]
    fn page_far_beyond_end_is_empty() {
        let items = numbers(5);
        assert!(paginate(&items, 100).is_empty());
        assert!(paginate(&items, i64::MAX).is_empty());
    }

    #[test]
    fn non_positive_page_is_empty() {
        let items = numbers(5);
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -1).is_empty());
    }

    #[test]
    fn empty_input_is_empty_on_every_page() {
        let items: Vec<usize> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }
}

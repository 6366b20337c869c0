/// Convert a 1-based page and a page size into a zero-based row offset.
///
/// Callers validate `page >= 1` and `limit >= 1` before this runs. No upper
/// bound is applied here: an arbitrarily large page yields a proportionally
/// large offset and the database returns an empty page. Saturates instead
/// of overflowing so an extreme page still lands past the last row.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(1, 25), 0);
        assert_eq!(offset(1, 1), 0);
    }

    #[test]
    fn later_pages_skip_full_pages() {
        assert_eq!(offset(2, 10), 10);
        assert_eq!(offset(5, 1), 4);
        assert_eq!(offset(3, 50), 100);
    }

    #[test]
    fn offset_grows_monotonically_with_page() {
        let limit = 17;
        let mut prev = offset(1, limit);
        for page in 2..100 {
            let next = offset(page, limit);
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn large_pages_are_not_clamped() {
        assert_eq!(offset(1_000_000, 100), 99_999_900);
    }

    #[test]
    fn extreme_pages_saturate_past_the_last_row() {
        assert_eq!(offset(i64::MAX, 2), i64::MAX);
        assert_eq!(offset(i64::MAX, i64::MAX), i64::MAX);
        assert!(offset(i64::MAX, 1) >= 0);
    }
}

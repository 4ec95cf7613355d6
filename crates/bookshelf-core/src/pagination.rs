//! Page slicing
//!
//! Pages are 1-indexed and hold [`BOOKS_PER_SHELF`] records. Page `n` covers
//! indices `[(n - 1) * 15, n * 15)`, clamped to the collection. Page numbers
//! below 1 are accepted and always select nothing.

use std::ops::Range;

use serde::{Deserialize, Deserializer};

/// Number of books on one page
pub const BOOKS_PER_SHELF: usize = 15;

/// A requested page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: i64) -> Self {
        Self(number)
    }

    /// Parse a raw `page` query value, falling back to the first page
    pub fn parse_or_first(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse().ok())
            .map(Self)
            .unwrap_or(Self::FIRST)
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// Index of the first record on this page, `None` for pages below 1
    pub fn offset(&self) -> Option<usize> {
        let index = usize::try_from(self.0.checked_sub(1)?).ok()?;
        index.checked_mul(BOOKS_PER_SHELF)
    }

    pub fn limit(&self) -> usize {
        BOOKS_PER_SHELF
    }

    /// Index range of this page within a collection of `len` records
    pub fn range(&self, len: usize) -> Range<usize> {
        match self.offset() {
            Some(start) if start < len => start..start.saturating_add(BOOKS_PER_SHELF).min(len),
            _ => len..len,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl<'de> Deserialize<'de> for Page {
    /// Lenient: anything that isn't an integer becomes the first page
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::parse_or_first(raw.as_deref()))
    }
}

/// Return the records on `page`
pub fn paginate<T: Clone>(records: &[T], page: Page) -> Vec<T> {
    records[page.range(records.len())].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(&ids(40), Page::FIRST);
        assert_eq!(page, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_last_page() {
        let page = paginate(&ids(40), Page::new(3));
        assert_eq!(page, (31..=40).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        assert!(paginate(&ids(5), Page::new(2)).is_empty());
        assert!(paginate(&ids(15), Page::new(2)).is_empty());
        assert!(paginate(&ids(0), Page::FIRST).is_empty());
    }

    #[test]
    fn test_zero_and_negative_pages_are_empty() {
        assert!(paginate(&ids(40), Page::new(0)).is_empty());
        assert!(paginate(&ids(40), Page::new(-1)).is_empty());
        assert!(paginate(&ids(40), Page::new(i64::MIN)).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        assert!(paginate(&ids(40), Page::new(i64::MAX)).is_empty());
    }

    #[test]
    fn test_slice_matches_window_for_all_pages() {
        for n in [0usize, 1, 14, 15, 16, 29, 30, 31, 77] {
            let records = ids(n);
            for p in 1..=7i64 {
                let page = paginate(&records, Page::new(p));
                let start = (p as usize - 1) * BOOKS_PER_SHELF;
                let expected: Vec<usize> = records
                    .iter()
                    .copied()
                    .skip(start)
                    .take(BOOKS_PER_SHELF)
                    .collect();
                assert!(page.len() <= BOOKS_PER_SHELF);
                assert_eq!(page, expected, "n={} page={}", n, p);
            }
        }
    }

    #[test]
    fn test_parse_or_first() {
        assert_eq!(Page::parse_or_first(None), Page::FIRST);
        assert_eq!(Page::parse_or_first(Some("3")), Page::new(3));
        assert_eq!(Page::parse_or_first(Some("abc")), Page::FIRST);
        assert_eq!(Page::parse_or_first(Some("")), Page::FIRST);
        assert_eq!(Page::parse_or_first(Some("-2")), Page::new(-2));
    }

    #[test]
    fn test_offset_and_limit() {
        assert_eq!(Page::FIRST.offset(), Some(0));
        assert_eq!(Page::new(4).offset(), Some(45));
        assert_eq!(Page::new(0).offset(), None);
        assert_eq!(Page::new(2).limit(), BOOKS_PER_SHELF);
    }

    #[test]
    fn test_deserialize_from_query_value() {
        #[derive(Deserialize)]
        struct Query {
            #[serde(default)]
            page: Page,
        }

        let q: Query = serde_json::from_str(r#"{"page": "2"}"#).unwrap();
        assert_eq!(q.page, Page::new(2));
        let q: Query = serde_json::from_str(r#"{"page": "two"}"#).unwrap();
        assert_eq!(q.page, Page::FIRST);
        let q: Query = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, Page::FIRST);
    }
}

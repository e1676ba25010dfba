//! Page state: page count, current page, and query offset for a bounded list.

use serde::Serialize;

/// Name of the query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Pagination state for one list of `total` items split into pages of `limit`.
///
/// A state with `limit == 0` (or `total == 0`) is "unconfigured": every getter
/// returns zero and no links are produced. Once configured, `current` always
/// lies in `1..=pages`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    total: i64,
    limit: i64,
    pages: i64,
    current: i64,
    path: String,
}

impl PageState {
    /// An unconfigured state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state and configure it right away when `total` and `limit` are positive.
    pub fn new(total: i64, limit: i64, requested: i64) -> Self {
        let mut state = Self::default();
        state.configure(total, limit, requested);
        state
    }

    /// Recompute the page count and current page.
    ///
    /// Leaves the state untouched when `total` or `limit` is not positive. A
    /// requested page outside `1..=pages` falls back to page 1.
    pub fn configure(&mut self, total: i64, limit: i64, requested: i64) -> &mut Self {
        if total <= 0 || limit <= 0 {
            tracing::trace!(total, limit, "Pagination left unconfigured");
            return self;
        }

        self.total = total;
        self.limit = limit;
        self.pages = (total - 1) / limit + 1;
        self.current = if (1..=self.pages).contains(&requested) {
            requested
        } else {
            if requested != 0 {
                tracing::debug!(
                    requested,
                    pages = self.pages,
                    "Requested page out of range, using page 1"
                );
            }
            1
        };

        self
    }

    /// Builder-style path setter.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> i64 {
        (self.current - 1).max(0) * self.limit
    }

    /// True when there is more than one page to navigate.
    pub fn has_pages(&self) -> bool {
        self.pages > 1
    }

    /// `page=N` for pages after the first; page 1 is never encoded.
    pub fn query_fragment(&self) -> String {
        if self.current > 1 {
            format!("{PAGE_PARAM}={}", self.current)
        } else {
            String::new()
        }
    }

    /// Append the current page to `path`, reusing an existing query string if present.
    pub fn append_query(&self, path: &str) -> String {
        if self.current <= 1 {
            return path.to_string();
        }

        format!("{path}{}{}", query_separator(path), self.query_fragment())
    }
}

/// `&` when `path` already carries a query string, `?` otherwise.
pub fn query_separator(path: &str) -> char {
    if path.contains('?') {
        '&'
    } else {
        '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_is_unconfigured() {
        let p = PageState::empty();
        assert_eq!(p.total(), 0);
        assert_eq!(p.limit(), 0);
        assert_eq!(p.pages(), 0);
        assert_eq!(p.current(), 0);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.path(), "");
        assert!(!p.has_pages());
        assert_eq!(p.query_fragment(), "");
    }

    #[test]
    fn new_configures_with_positive_values() {
        let p = PageState::new(110, 20, 0);
        assert_eq!(p.total(), 110);
        assert_eq!(p.limit(), 20);
        assert_eq!(p.pages(), 6);
        assert_eq!(p.current(), 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn configure_counts_pages() {
        let mut p = PageState::empty();
        p.configure(21, 5, 0);
        assert_eq!(p.pages(), 5);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn configure_honours_requested_page() {
        let p = PageState::new(23, 5, 3);
        assert_eq!(p.current(), 3);
    }

    #[test]
    fn out_of_range_pages_fall_back_to_first() {
        for requested in [0, -4, 6, 99, i64::MIN, i64::MAX] {
            let p = PageState::new(23, 5, requested);
            assert_eq!(p.current(), 1, "requested {requested}");
        }
    }

    #[test]
    fn non_positive_inputs_leave_state_untouched() {
        let mut p = PageState::new(23, 5, 2);
        let before = p.clone();

        p.configure(0, 5, 1);
        p.configure(23, 0, 1);
        p.configure(-1, -1, 1);

        assert_eq!(p, before);
    }

    #[test]
    fn pages_zero_only_when_unconfigured() {
        for total in 0..40 {
            for limit in 0..8 {
                let p = PageState::new(total, limit, 1);
                if total == 0 || limit == 0 {
                    assert_eq!(p.pages(), 0);
                } else {
                    assert_eq!(p.pages(), (total + limit - 1) / limit);
                    assert!(p.current() >= 1 && p.current() <= p.pages());
                }
            }
        }
    }

    #[test]
    fn offset_follows_current_page() {
        assert_eq!(PageState::new(110, 20, 1).offset(), 0);
        assert_eq!(PageState::new(110, 20, 3).offset(), 40);
        assert_eq!(PageState::new(110, 20, 6).offset(), 100);
    }

    #[test]
    fn query_fragment_skips_first_page() {
        assert_eq!(PageState::new(23, 5, 1).query_fragment(), "");
        assert_eq!(PageState::new(23, 5, 3).query_fragment(), "page=3");
    }

    #[test]
    fn append_query_picks_separator() {
        let p = PageState::new(23, 5, 3);
        assert_eq!(p.append_query("/catalog/new"), "/catalog/new?page=3");
        assert_eq!(
            p.append_query("/catalog/new?test=hello"),
            "/catalog/new?test=hello&page=3"
        );

        let first = PageState::new(23, 5, 1);
        assert_eq!(first.append_query("/catalog/new"), "/catalog/new");
    }

    #[test]
    fn has_pages_needs_more_than_one_page() {
        let mut p = PageState::empty();
        assert!(!p.has_pages());

        p.configure(3, 5, 3);
        assert!(!p.has_pages());

        p.configure(23, 5, 3);
        assert!(p.has_pages());
    }

    #[test]
    fn path_is_set_independently() {
        let mut p = PageState::new(23, 5, 2).with_path("/catalog");
        assert_eq!(p.path(), "/catalog");
        assert_eq!(p.current(), 2);

        p.set_path("/catalog/new");
        assert_eq!(p.path(), "/catalog/new");
        assert_eq!(p.pages(), 5);
    }
}

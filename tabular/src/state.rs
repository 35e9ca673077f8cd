//! Interactive view state and its transitions.

use crate::page;
use crate::sort::Direction;

/// The table's interactive state: search query, sort key and direction,
/// current 1-based page.
///
/// All mutation goes through the three transitions below, which makes the
/// page-reset invariant — the current page must always be valid for the
/// current filtered set — a property of the reducer instead of a
/// convention spread across event handlers. Whenever the query or the
/// sort changes, the page snaps back to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    query: String,
    sort: Option<(String, Direction)>,
    page: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<(&str, Direction)> {
        self.sort.as_ref().map(|(key, dir)| (key.as_str(), *dir))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search query. A changed query resets to page 1;
    /// setting the same text again is a no-op.
    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    /// Cycle the sort state for a column key: unsorted → ascending →
    /// descending → unsorted. Sorting a different key starts ascending.
    /// Always resets to page 1.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some((current, Direction::Asc)) if current == key => {
                Some((current, Direction::Desc))
            }
            Some((current, Direction::Desc)) if current == key => None,
            _ => Some((key.to_string(), Direction::Asc)),
        };
        self.page = 1;
    }

    /// Jump to a page, clamped into the valid range for `total_pages`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page::clamp(page, total_pages);
    }

    /// Re-clamp after the filtered set shrank underneath the stored page.
    pub(crate) fn clamp_page(&mut self, total_pages: usize) {
        self.page = page::clamp(self.page, total_pages);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.query(), "");
        assert_eq!(state.sort(), None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = ViewState::new();
        state.set_page(3, 5);
        state.set_search("x");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_same_search_keeps_page() {
        let mut state = ViewState::new();
        state.set_search("x");
        state.set_page(2, 5);
        state.set_search("x");
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_sort_cycle_asc_desc_clear() {
        let mut state = ViewState::new();
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(("name", Direction::Asc)));
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(("name", Direction::Desc)));
        state.toggle_sort("name");
        assert_eq!(state.sort(), None);
    }

    #[test]
    fn test_sorting_other_key_starts_ascending() {
        let mut state = ViewState::new();
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.toggle_sort("price");
        assert_eq!(state.sort(), Some(("price", Direction::Asc)));
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut state = ViewState::new();
        state.set_page(4, 9);
        state.toggle_sort("name");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = ViewState::new();
        state.set_page(0, 5);
        assert_eq!(state.page(), 1);
        state.set_page(99, 5);
        assert_eq!(state.page(), 5);
    }
}

use crate::page::{clamp_page, FIRST_PAGE};

/// Current page of a deck, bounded once the page count is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_page: u32,
    page_count: Option<u32>,
}

impl NavigationState {
    /// Starts on the page recovered from the location, before metadata exists.
    pub fn new(location_page: u32) -> Self {
        Self {
            current_page: location_page.max(FIRST_PAGE),
            page_count: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    pub fn is_ready(&self) -> bool {
        self.page_count.is_some()
    }

    pub fn is_first(&self) -> bool {
        self.current_page == FIRST_PAGE
    }

    pub fn is_last(&self) -> bool {
        self.page_count == Some(self.current_page)
    }

    /// Records the page count and re-derives the page from the location.
    pub fn set_page_count(&mut self, page_count: u32, location_page: u32) -> bool {
        let page_count = page_count.max(FIRST_PAGE);
        self.page_count = Some(page_count);
        self.replace(clamp_page(i64::from(location_page), page_count))
    }

    pub fn go_to_page(&mut self, page: i64) -> bool {
        let Some(page_count) = self.page_count else {
            return false;
        };
        self.replace(clamp_page(page, page_count))
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(i64::from(self.current_page) - 1)
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(i64::from(self.current_page) + 1)
    }

    /// Takes a page announced by another view.
    ///
    /// Before the page count is known the value is kept as-is; it is
    /// reconciled against the location once metadata arrives.
    pub fn adopt(&mut self, page: u32) -> bool {
        let page = match self.page_count {
            Some(page_count) => clamp_page(i64::from(page), page_count),
            None => page.max(FIRST_PAGE),
        };
        self.replace(page)
    }

    fn replace(&mut self, page: u32) -> bool {
        if self.current_page == page {
            return false;
        }
        self.current_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_is_inert_before_metadata() {
        let mut nav = NavigationState::new(3);
        assert!(!nav.next_page());
        assert!(!nav.go_to_page(1));
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn metadata_reclamps_location_page() {
        let mut nav = NavigationState::new(99);
        assert!(nav.set_page_count(5, 99));
        assert_eq!(nav.current_page(), 5);
        assert!(nav.is_last());
    }

    #[test]
    fn adopt_clamps_once_ready() {
        let mut nav = NavigationState::new(1);
        nav.set_page_count(4, 1);
        assert!(nav.adopt(10));
        assert_eq!(nav.current_page(), 4);
        assert!(!nav.adopt(4));
    }

    #[test]
    fn adopt_before_ready_keeps_value() {
        let mut nav = NavigationState::new(1);
        assert!(nav.adopt(8));
        assert_eq!(nav.current_page(), 8);
        assert!(nav.adopt(0));
        assert_eq!(nav.current_page(), 1);
    }
}

use std::ops::RangeInclusive;

use crate::page::{look_ahead_page, FIRST_PAGE};

/// Which image stack a page element belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceSlot {
    Current,
    LookAhead,
}

impl SurfaceSlot {
    /// Page shown by this slot for the given position in the deck.
    pub fn shown_page(self, current: u32, page_count: u32) -> u32 {
        match self {
            SurfaceSlot::Current => current,
            SurfaceSlot::LookAhead => look_ahead_page(current, page_count),
        }
    }

    pub fn is_visible(self, page: u32, current: u32, page_count: u32) -> bool {
        self.shown_page(current, page_count) == page
    }
}

/// Every page number of the deck, in order.
pub fn page_numbers(page_count: u32) -> RangeInclusive<u32> {
    FIRST_PAGE..=page_count
}

pub fn page_image_src(pages_dir: &str, page: u32) -> String {
    let dir = pages_dir.trim_end_matches('/');
    format!("{dir}/{page}.svg")
}

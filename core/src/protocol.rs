use serde::{Deserialize, Serialize};

/// Name of the broadcast channel shared by every open view of a deck.
pub const SLIDE_CHANNEL_NAME: &str = "slide-sync";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncMessage {
    pub current_page: u32,
}

impl SyncMessage {
    pub fn new(current_page: u32) -> Self {
        Self { current_page }
    }

    /// Page carried by the message, if it names a real page.
    pub fn page(&self) -> Option<u32> {
        (self.current_page > 0).then_some(self.current_page)
    }
}

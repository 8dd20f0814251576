#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// Maps a `KeyboardEvent.code` to a paging direction.
pub fn direction_for_key(code: &str) -> Option<PageDirection> {
    match code {
        "ArrowLeft" | "ArrowUp" => Some(PageDirection::Previous),
        "ArrowRight" | "ArrowDown" => Some(PageDirection::Next),
        _ => None,
    }
}

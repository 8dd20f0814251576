use crate::dom::js_err;

/// Enters fullscreen on the document element, or leaves it when active.
pub(crate) fn toggle_fullscreen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return;
    }
    let Some(root) = document.document_element() else {
        return;
    };
    if let Err(err) = root.request_fullscreen() {
        gloo::console::warn!("fullscreen request failed", js_err(err));
    }
}

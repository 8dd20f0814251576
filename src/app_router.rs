use web_sys::UrlSearchParams;

use deckview_core::config::{MODE_PARAM, PRESENTER_WINDOW_FEATURES, PRESENTER_WINDOW_NAME};
use deckview_core::{hash_for_page, page_from_location, presenter_url, LaunchMode, ViewerConfig};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct InitConfig {
    pub(crate) mode: LaunchMode,
    pub(crate) viewer: ViewerConfig,
}

pub(crate) fn load_init_config() -> InitConfig {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let mut config = parse_init_config(&search);
    if let Some(url) = default_metadata_url() {
        config.viewer.metadata_url = url;
    }
    config
}

fn parse_init_config(search: &str) -> InitConfig {
    let mut viewer = ViewerConfig::default();
    let Ok(params) = UrlSearchParams::new_with_str(search.trim()) else {
        return InitConfig {
            mode: LaunchMode::Main,
            viewer,
        };
    };
    let mode = LaunchMode::from_query_value(params.get(MODE_PARAM).as_deref());
    for key in ["sync", "throttle", "lock"] {
        if let Some(value) = params.get(key) {
            if !viewer.apply_query_param(key, &value) {
                gloo::console::warn!("ignoring query switch", key, value);
            }
        }
    }
    InitConfig { mode, viewer }
}

fn default_metadata_url() -> Option<String> {
    let raw = option_env!("DECKVIEW_METADATA_URL")?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Page encoded in the current location fragment, 1 when absent or invalid.
pub(crate) fn location_page() -> u32 {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    page_from_location(&hash)
}

/// Rewrites the fragment when it no longer matches `page`.
pub(crate) fn sync_location_to_page(page: u32) {
    if location_page() == page {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().set_hash(&hash_for_page(page));
}

pub(crate) fn open_presenter_window(page: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let url = presenter_url(page);
    // noopener makes `open` return null even on success
    if let Err(err) = window.open_with_url_and_target_and_features(
        &url,
        PRESENTER_WINDOW_NAME,
        PRESENTER_WINDOW_FEATURES,
    ) {
        gloo::console::warn!("failed to open presenter window", crate::dom::js_err(err));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn presenter_mode_from_query() {
        let config = parse_init_config("?mode=presenter&sync=off");
        assert_eq!(config.mode, LaunchMode::Presenter);
        assert!(!config.viewer.cross_window_sync);
        assert!(config.viewer.key_throttle);
    }

    #[wasm_bindgen_test]
    fn empty_query_is_main_view() {
        let config = parse_init_config("");
        assert_eq!(config.mode, LaunchMode::Main);
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[wasm_bindgen_test]
    fn location_follows_page() {
        sync_location_to_page(6);
        assert_eq!(location_page(), 6);
        sync_location_to_page(2);
        assert_eq!(location_page(), 2);
    }
}

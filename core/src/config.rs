use crate::deck::DeckSettings;
use crate::page::hash_for_page;
use crate::protocol::SLIDE_CHANNEL_NAME;

pub const METADATA_URL: &str = "./metadata.json";
pub const PAGES_DIR: &str = "./pages";
pub const KEY_THROTTLE_MS: u32 = 150;
pub const TRANSITION_MS: u32 = 150;
pub const MENU_QUIET_MS: u32 = 3000;
pub const CLOCK_TICK_MS: u32 = 1000;

pub const MODE_PARAM: &str = "mode";
pub const PRESENTER_MODE_VALUE: &str = "presenter";
pub const PRESENTER_WINDOW_NAME: &str = "presenter";
pub const PRESENTER_WINDOW_FEATURES: &str = "width=1024,height=768,noopener,noreferrer";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaunchMode {
    #[default]
    Main,
    Presenter,
}

impl LaunchMode {
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value {
            Some(PRESENTER_MODE_VALUE) => LaunchMode::Presenter,
            _ => LaunchMode::Main,
        }
    }

    pub fn is_presenter(self) -> bool {
        matches!(self, LaunchMode::Presenter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub metadata_url: String,
    pub pages_dir: String,
    pub channel_name: String,
    pub key_throttle_ms: u32,
    pub transition_ms: u32,
    pub menu_quiet_ms: u32,
    pub clock_tick_ms: u32,
    pub key_throttle: bool,
    pub transition_lock: bool,
    pub cross_window_sync: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            metadata_url: METADATA_URL.to_string(),
            pages_dir: PAGES_DIR.to_string(),
            channel_name: SLIDE_CHANNEL_NAME.to_string(),
            key_throttle_ms: KEY_THROTTLE_MS,
            transition_ms: TRANSITION_MS,
            menu_quiet_ms: MENU_QUIET_MS,
            clock_tick_ms: CLOCK_TICK_MS,
            key_throttle: true,
            transition_lock: true,
            cross_window_sync: true,
        }
    }
}

impl ViewerConfig {
    /// Applies one query parameter; unknown keys and values are ignored.
    /// Returns whether the parameter was understood.
    pub fn apply_query_param(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "sync" => &mut self.cross_window_sync,
            "throttle" => &mut self.key_throttle,
            "lock" => &mut self.transition_lock,
            _ => return false,
        };
        match parse_switch(value) {
            Some(enabled) => {
                *slot = enabled;
                true
            }
            None => false,
        }
    }

    pub fn deck_settings(&self) -> DeckSettings {
        DeckSettings {
            key_throttle_ms: self.key_throttle.then_some(f64::from(self.key_throttle_ms)),
            transition_lock: self.transition_lock,
        }
    }
}

/// URL of the presenter view, positioned on `page`.
pub fn presenter_url(page: u32) -> String {
    format!(
        "./?{MODE_PARAM}={PRESENTER_MODE_VALUE}{}",
        hash_for_page(page)
    )
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_mode_requires_exact_value() {
        assert_eq!(LaunchMode::from_query_value(Some("presenter")), LaunchMode::Presenter);
        assert_eq!(LaunchMode::from_query_value(Some("Presenter")), LaunchMode::Main);
        assert_eq!(LaunchMode::from_query_value(None), LaunchMode::Main);
    }

    #[test]
    fn query_switches_toggle_layers() {
        let mut config = ViewerConfig::default();
        assert!(config.apply_query_param("sync", "off"));
        assert!(config.apply_query_param("throttle", "0"));
        assert!(!config.apply_query_param("lock", "maybe"));
        assert!(!config.apply_query_param("theme", "dark"));
        assert!(!config.cross_window_sync);
        assert!(config.transition_lock);
        assert_eq!(config.deck_settings().key_throttle_ms, None);
    }

    #[test]
    fn default_deck_settings_enable_everything() {
        let settings = ViewerConfig::default().deck_settings();
        assert_eq!(settings.key_throttle_ms, Some(150.0));
        assert!(settings.transition_lock);
    }

    #[test]
    fn presenter_url_carries_page() {
        assert_eq!(presenter_url(4), "./?mode=presenter#4");
    }
}

//! User preferences persisted across visits

use serde::{Deserialize, Serialize};

use crate::renderer::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Show the alive/dead counter under the hero
    pub show_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_stats: true,
        }
    }
}

impl Settings {
    const STORAGE_KEY: &'static str = "life_hero_settings";

    /// Parse stored JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, using default settings");
            return Self::default();
        };
        if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
            if let Some(settings) = Self::from_json(&json) {
                log::info!("Loaded settings from LocalStorage");
                return settings;
            }
            log::warn!("Ignoring unreadable stored settings");
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.show_stats);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.show_stats);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            theme: Theme::Dark,
            show_stats: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"theme":"dark","show_stats":false}"#);
        assert_eq!(Settings::from_json(&json), Some(settings));
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(Settings::from_json("not json"), None);
        assert_eq!(Settings::from_json(r#"{"theme":"sepia"}"#), None);
    }

    #[test]
    fn test_native_load_is_default() {
        Settings::default().save();
        assert_eq!(Settings::load(), Settings::default());
    }
}

use crate::app_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// ============================================================================
// App Config
// ============================================================================

/// Persisted settings. `game_path` overrides Steam detection when the game
/// lives somewhere the locator cannot find on its own.
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct AppConfig {
    pub game_path: Option<PathBuf>,
}

impl AppConfig {
    fn get_path() -> PathBuf {
        app_path!("config.json")
    }

    pub fn load() -> Self {
        let path = Self::get_path();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(config) = serde_json::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        let path = Self::get_path();
        // Ensure parent dir exists
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }
}

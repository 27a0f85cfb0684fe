use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Viewer defaults remembered between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_color_coded")]
    pub color_coded: bool,
    #[serde(default)]
    pub multi_face_only: bool,
}

fn default_color_coded() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_coded: default_color_coded(),
            multi_face_only: false,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ClusterViewer").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|json| Self::from_json(&json))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                if fs::write(&path, json).is_ok() {
                    log::info!("Saved settings to {}", path.display());
                }
            }
        }
    }

    fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

// GUI configuration module
pub mod theme; // Palettes for balance tones and advisory kinds

use engine::AdvisorSettings;
use serde::Deserialize;

use crate::state::app_state::Theme;

// Mirrors assets/config/default.json
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub advisor: AdvisorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub title: String,
    pub theme: String, // "dark" or "light"
    pub language: String,
}

impl AppSettings {
    pub fn theme(&self) -> Theme {
        match self.theme.to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            other => {
                tracing::warn!("Unknown theme '{}' in config, using light", other);
                Theme::Light
            }
        }
    }
}

impl AppConfig {
    // The default config is embedded so the binary runs from any directory.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.advisor.validate()?;
        Ok(config)
    }
}

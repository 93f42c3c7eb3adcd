// Theme specific configurations (colors)
use engine::services::BalanceTone;
use serde::{Deserialize, Serialize};
use shared::AdvisoryKind;

use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub surface: String,
    pub border: String,
    pub balance_positive: String,
    pub balance_negative: String,
    pub alert: String,
    pub success: String,
    pub info: String,
}

impl ThemePalette {
    pub fn for_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            surface: "#2a2a2a".to_string(),
            border: "#565656".to_string(),
            balance_positive: "#26a69a".to_string(),
            balance_negative: "#ef5350".to_string(),
            alert: "#ef5350".to_string(),
            success: "#26a69a".to_string(),
            info: "#42a5f5".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            surface: "#f5f5f5".to_string(),
            border: "#e0e0e0".to_string(),
            balance_positive: "#2e7d32".to_string(),
            balance_negative: "#c62828".to_string(),
            alert: "#f44336".to_string(),
            success: "#4caf50".to_string(),
            info: "#1976d2".to_string(),
        }
    }

    pub fn tone_color(&self, tone: BalanceTone) -> &str {
        match tone {
            BalanceTone::NonNegative => &self.balance_positive,
            BalanceTone::Negative => &self.balance_negative,
        }
    }

    pub fn kind_color(&self, kind: AdvisoryKind) -> &str {
        match kind {
            AdvisoryKind::Alert => &self.alert,
            AdvisoryKind::Success => &self.success,
            AdvisoryKind::Info => &self.info,
        }
    }
}

// Advisor thresholds, loadable from a configuration file or the GUI's
// embedded default config.
use serde::Deserialize;
use std::path::Path;

use crate::error::EngineError;

pub const RENT_RATIO_CAP: f64 = 0.33;
pub const CREDIT_CARD_RATIO_CAP: f64 = 0.25;
pub const MIN_REMAINING_PER_PERSON: f64 = 100.0;
pub const EMERGENCY_FUND_MONTHS: u32 = 3;
pub const DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AdvisorSettings {
    /// Rent at or above this share of income raises an alert.
    pub rent_ratio_cap: f64,
    /// Card spend strictly above this share of income raises an alert.
    pub credit_card_ratio_cap: f64,
    pub min_remaining_per_person: f64,
    /// Emergency reserve target, in months of expenses.
    pub emergency_fund_months: u32,
    /// Quiet window before the UI re-evaluates after typing.
    pub debounce_ms: u64,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        AdvisorSettings {
            rent_ratio_cap: RENT_RATIO_CAP,
            credit_card_ratio_cap: CREDIT_CARD_RATIO_CAP,
            min_remaining_per_person: MIN_REMAINING_PER_PERSON,
            emergency_fund_months: EMERGENCY_FUND_MONTHS,
            debounce_ms: DEBOUNCE_MS,
        }
    }
}

impl AdvisorSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: AdvisorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents).map_err(|e| {
            tracing::warn!("Rejected advisor settings from {}: {}", path.as_ref().display(), e);
            e
        })
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let ratio_ok = |r: f64| r.is_finite() && r > 0.0 && r <= 1.0;
        if !ratio_ok(self.rent_ratio_cap) {
            return Err(EngineError::ConfigError(format!(
                "rent_ratio_cap must be in (0, 1], got {}",
                self.rent_ratio_cap
            )));
        }
        if !ratio_ok(self.credit_card_ratio_cap) {
            return Err(EngineError::ConfigError(format!(
                "credit_card_ratio_cap must be in (0, 1], got {}",
                self.credit_card_ratio_cap
            )));
        }
        if !self.min_remaining_per_person.is_finite() || self.min_remaining_per_person < 0.0 {
            return Err(EngineError::ConfigError(format!(
                "min_remaining_per_person must be non-negative, got {}",
                self.min_remaining_per_person
            )));
        }
        if self.emergency_fund_months == 0 {
            return Err(EngineError::ConfigError(
                "emergency_fund_months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn debounce_window(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Income/expense totals for one evaluation cycle.
///
/// `remaining` is allowed to be negative: spending more than earning is a
/// valid state that the advisor reports on, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub income: f64,
    pub expenses: f64,
    pub remaining: f64,
}

impl Snapshot {
    pub fn new(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            remaining: income - expenses,
        }
    }
}

/// Values the advisory rules read besides the snapshot itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleInputs {
    pub rent: f64,
    pub credit_card: f64,
    pub household_size: u32,
    pub food_spend: f64,
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Alert,
    Success,
    Info,
}

impl AdvisoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryKind::Alert => "alert",
            AdvisoryKind::Success => "success",
            AdvisoryKind::Info => "info",
        }
    }
}

// Which rule family produced a message. Lets renderers group or badge
// messages without matching on their text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTopic {
    Rent,
    CreditCard,
    PerPerson,
    EmergencyFund,
    FoodBasket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub topic: AdvisoryTopic,
    pub text: String,
}

impl Advisory {
    pub fn alert(topic: AdvisoryTopic, text: impl Into<String>) -> Self {
        Self { kind: AdvisoryKind::Alert, topic, text: text.into() }
    }

    pub fn success(topic: AdvisoryTopic, text: impl Into<String>) -> Self {
        Self { kind: AdvisoryKind::Success, topic, text: text.into() }
    }

    pub fn info(topic: AdvisoryTopic, text: impl Into<String>) -> Self {
        Self { kind: AdvisoryKind::Info, topic, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_remaining() {
        assert_eq!(Snapshot::new(1000.0, 400.0).remaining, 600.0);
        assert_eq!(Snapshot::new(400.0, 1000.0).remaining, -600.0);
    }

    #[test]
    fn test_advisory_serializes_lowercase_kind() {
        let advisory = Advisory::info(AdvisoryTopic::EmergencyFund, "Reserva");
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["kind"], "info");
        assert_eq!(json["topic"], "emergency_fund");
        assert_eq!(json["text"], "Reserva");
    }

    #[test]
    fn test_rule_inputs_default_has_no_region() {
        let inputs = RuleInputs::default();
        assert_eq!(inputs.household_size, 0);
        assert!(inputs.region.is_none());
    }
}

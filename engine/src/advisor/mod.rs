//! Advisory rule engine.
//!
//! Rules are registered in a fixed order and evaluated independently: each
//! one looks at the snapshot and the rule inputs and appends zero or more
//! messages. Nothing is sorted or deduplicated afterwards, so the output
//! order is exactly the registration order.

pub mod credit_card;
pub mod emergency_fund;
pub mod food_basket;
pub mod per_person;
pub mod rent;

use shared::{Advisory, RuleInputs, Snapshot};
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::config::AdvisorSettings;
use crate::data::FoodBasketTable;

pub use credit_card::CreditCardBurdenRule;
pub use emergency_fund::EmergencyFundRule;
pub use food_basket::FoodBasketRule;
pub use per_person::PerPersonRemainingRule;
pub use rent::RentBurdenRule;

/// Everything a rule may read during one evaluation.
pub struct RuleContext<'a> {
    pub snapshot: &'a Snapshot,
    pub inputs: &'a RuleInputs,
    pub settings: &'a AdvisorSettings,
    pub basket: &'a FoodBasketTable,
}

// Common trait for all advisory rules
pub trait AdvisoryRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Appends this rule's messages (if any) to `out`. Must not touch
    /// messages appended by other rules.
    fn evaluate(&self, ctx: &RuleContext<'_>, out: &mut Vec<Advisory>);
}

pub struct AdvisorEngine {
    rules: Vec<Box<dyn AdvisoryRule>>,
    settings: AdvisorSettings,
    basket: Cow<'static, FoodBasketTable>,
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisorEngine {
    /// Built-in rules, default thresholds, standard food-basket table.
    pub fn new() -> Self {
        Self::with_settings(AdvisorSettings::default())
    }

    pub fn with_settings(settings: AdvisorSettings) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            settings,
            basket: Cow::Borrowed(FoodBasketTable::standard()),
        };

        // Order matters: it is the order messages are shown in.
        engine.register(Box::new(RentBurdenRule));
        engine.register(Box::new(CreditCardBurdenRule));
        engine.register(Box::new(PerPersonRemainingRule));
        engine.register(Box::new(EmergencyFundRule));
        engine.register(Box::new(FoodBasketRule));

        engine
    }

    /// Swaps the food-basket reference table (e.g. a newer reference month).
    pub fn with_basket_table(mut self, table: FoodBasketTable) -> Self {
        self.basket = Cow::Owned(table);
        self
    }

    /// Appends a rule after the built-in ones.
    pub fn register(&mut self, rule: Box<dyn AdvisoryRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn settings(&self) -> &AdvisorSettings {
        &self.settings
    }

    pub fn basket_table(&self) -> &FoodBasketTable {
        &self.basket
    }

    pub fn evaluate(&self, snapshot: &Snapshot, inputs: &RuleInputs) -> Vec<Advisory> {
        let ctx = RuleContext {
            snapshot,
            inputs,
            settings: &self.settings,
            basket: &self.basket,
        };

        let mut advisories = Vec::new();
        for rule in &self.rules {
            let before = advisories.len();
            rule.evaluate(&ctx, &mut advisories);
            tracing::trace!(rule = rule.name(), emitted = advisories.len() - before, "Rule evaluated");
        }

        tracing::debug!(
            income = snapshot.income,
            expenses = snapshot.expenses,
            remaining = snapshot.remaining,
            count = advisories.len(),
            "Advisory evaluation complete"
        );
        advisories
    }
}

static DEFAULT_ENGINE: OnceLock<AdvisorEngine> = OnceLock::new();

/// Evaluates with the built-in rules and default thresholds.
pub fn evaluate(snapshot: &Snapshot, inputs: &RuleInputs) -> Vec<Advisory> {
    DEFAULT_ENGINE.get_or_init(AdvisorEngine::new).evaluate(snapshot, inputs)
}

// Shared by the per-rule test modules.
#[cfg(test)]
pub(crate) fn run_rule(rule: &dyn AdvisoryRule, snapshot: Snapshot, inputs: RuleInputs) -> Vec<Advisory> {
    let settings = AdvisorSettings::default();
    let ctx = RuleContext {
        snapshot: &snapshot,
        inputs: &inputs,
        settings: &settings,
        basket: FoodBasketTable::standard(),
    };
    let mut out = Vec::new();
    rule.evaluate(&ctx, &mut out);
    out
}

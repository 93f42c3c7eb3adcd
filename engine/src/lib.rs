// Engine library root
// Pure budget core: amount parsing/formatting, snapshot builder, advisory
// rules, plus the collaborators the UI drives it through.

pub mod advisor;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod snapshot;

pub use advisor::{evaluate, AdvisorEngine, AdvisoryRule, RuleContext};
pub use config::AdvisorSettings;
pub use data::{format_amount, format_currency, parse_amount, FoodBasketTable};
pub use error::EngineError;
pub use models::BudgetForm;
pub use snapshot::compute_snapshot;

use services::presenter::{present, Presentation};

/// One full cycle as the UI runs it: form -> snapshot -> rules -> render model.
pub fn assess(engine: &AdvisorEngine, form: &BudgetForm) -> Presentation {
    let snapshot = form.snapshot();
    let advisories = engine.evaluate(&snapshot, &form.rule_inputs());
    present(&snapshot, advisories)
}

// Remaining balance split across the household.
use shared::{Advisory, AdvisoryTopic};

use super::{AdvisoryRule, RuleContext};
use crate::data::format_currency;

pub struct PerPersonRemainingRule;

impl AdvisoryRule for PerPersonRemainingRule {
    fn name(&self) -> &'static str {
        "per_person_remaining"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, out: &mut Vec<Advisory>) {
        let household = ctx.inputs.household_size;
        if ctx.snapshot.income <= 0.0 || household == 0 {
            return;
        }

        let per_person = ctx.snapshot.remaining / f64::from(household);
        let minimum = ctx.settings.min_remaining_per_person;

        let advisory = if per_person <= 0.0 {
            Advisory::alert(
                AdvisoryTopic::PerPerson,
                "Você está gastando mais do que ganha. Revise suas despesas.",
            )
        } else if per_person < minimum {
            Advisory::alert(
                AdvisoryTopic::PerPerson,
                format!(
                    "Sobram apenas {} por pessoa no mês. O mínimo recomendado é {}.",
                    format_currency(per_person),
                    format_currency(minimum)
                ),
            )
        } else {
            Advisory::success(
                AdvisoryTopic::PerPerson,
                format!("Sobram {} por pessoa no mês. Bom trabalho!", format_currency(per_person)),
            )
        };
        out.push(advisory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::run_rule;
    use shared::{AdvisoryKind, RuleInputs, Snapshot};

    fn household(household_size: u32) -> RuleInputs {
        RuleInputs { household_size, ..RuleInputs::default() }
    }

    #[test]
    fn test_overspending_alert() {
        let out = run_rule(&PerPersonRemainingRule, Snapshot::new(1000.0, 1200.0), household(2));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, AdvisoryKind::Alert);
        assert!(out[0].text.contains("gastando mais do que ganha"));

        // break-even counts as "not earning enough" too
        let out = run_rule(&PerPersonRemainingRule, Snapshot::new(1000.0, 1000.0), household(2));
        assert_eq!(out[0].kind, AdvisoryKind::Alert);
        assert!(out[0].text.contains("gastando mais do que ganha"));
    }

    #[test]
    fn test_below_minimum_alert_shows_amount() {
        let out = run_rule(&PerPersonRemainingRule, Snapshot::new(1000.0, 850.0), household(3));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, AdvisoryKind::Alert);
        assert!(out[0].text.contains("R$ 50,00"));
        assert!(out[0].text.contains("R$ 100,00"));
    }

    #[test]
    fn test_at_minimum_is_success() {
        let out = run_rule(&PerPersonRemainingRule, Snapshot::new(1000.0, 800.0), household(2));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, AdvisoryKind::Success);
        assert!(out[0].text.contains("R$ 100,00"));
    }

    #[test]
    fn test_guards() {
        assert!(run_rule(&PerPersonRemainingRule, Snapshot::new(0.0, 100.0), household(2)).is_empty());
        assert!(run_rule(&PerPersonRemainingRule, Snapshot::new(1000.0, 100.0), household(0)).is_empty());
    }
}

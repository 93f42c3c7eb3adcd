// Rent burden: housing at or above the rent cap share of income.
use shared::{Advisory, AdvisoryTopic};

use super::{AdvisoryRule, RuleContext};
use crate::data::format_currency;

pub struct RentBurdenRule;

impl AdvisoryRule for RentBurdenRule {
    fn name(&self) -> &'static str {
        "rent_burden"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, out: &mut Vec<Advisory>) {
        let income = ctx.snapshot.income;
        let rent = ctx.inputs.rent;
        let cap = ctx.settings.rent_ratio_cap;

        if income > 0.0 && rent >= cap * income {
            out.push(Advisory::alert(
                AdvisoryTopic::Rent,
                format!(
                    "O aluguel de {} compromete {:.0}% da sua renda. O recomendado é ficar abaixo de {:.0}%.",
                    format_currency(rent),
                    rent / income * 100.0,
                    cap * 100.0
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::run_rule;
    use shared::{AdvisoryKind, RuleInputs, Snapshot};

    fn with_rent(rent: f64) -> RuleInputs {
        RuleInputs { rent, ..RuleInputs::default() }
    }

    #[test]
    fn test_fires_at_or_above_cap() {
        let out = run_rule(&RentBurdenRule, Snapshot::new(3000.0, 0.0), with_rent(1000.0));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, AdvisoryKind::Alert);
        assert!(out[0].text.contains("R$ 1000,00"));
        assert!(out[0].text.contains("33%"));

        // 0.33 * 1000 = 330, boundary is inclusive
        let out = run_rule(&RentBurdenRule, Snapshot::new(1000.0, 0.0), with_rent(330.0));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_silent_below_cap() {
        let out = run_rule(&RentBurdenRule, Snapshot::new(3000.0, 0.0), with_rent(900.0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_silent_without_income() {
        let out = run_rule(&RentBurdenRule, Snapshot::new(0.0, 0.0), with_rent(1000.0));
        assert!(out.is_empty());
    }
}

// Emergency reserve: target amount, and how long it takes to get there.
//
// With remaining exactly zero only the target is reported; neither the
// timeline nor the shortfall alert applies.
use shared::{Advisory, AdvisoryTopic};

use super::{AdvisoryRule, RuleContext};
use crate::data::format_currency;

pub struct EmergencyFundRule;

/// Whole months needed to save `target` putting aside `monthly` each month.
pub fn months_to_target(target: f64, monthly: f64) -> u64 {
    (target / monthly).ceil() as u64
}

impl AdvisoryRule for EmergencyFundRule {
    fn name(&self) -> &'static str {
        "emergency_fund"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, out: &mut Vec<Advisory>) {
        let expenses = ctx.snapshot.expenses;
        if expenses <= 0.0 {
            return;
        }

        let months = ctx.settings.emergency_fund_months;
        let target = expenses * f64::from(months);
        out.push(Advisory::info(
            AdvisoryTopic::EmergencyFund,
            format!(
                "Sua reserva de emergência ideal é de {} ({} meses de despesas).",
                format_currency(target),
                months
            ),
        ));

        let remaining = ctx.snapshot.remaining;
        if remaining > 0.0 {
            let needed = months_to_target(target, remaining);
            let unit = if needed == 1 { "mês" } else { "meses" };
            out.push(Advisory::info(
                AdvisoryTopic::EmergencyFund,
                format!(
                    "Guardando todo o saldo de {} por mês, você forma a reserva em {} {}.",
                    format_currency(remaining),
                    needed,
                    unit
                ),
            ));
        } else if remaining < 0.0 {
            out.push(Advisory::alert(
                AdvisoryTopic::EmergencyFund,
                "Reduza gastos ou aumente a renda para conseguir formar uma reserva.",
            ));
        }
    }
}

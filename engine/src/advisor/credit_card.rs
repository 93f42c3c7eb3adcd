use shared::{Advisory, AdvisoryTopic};

use super::{AdvisoryRule, RuleContext};
use crate::data::format_currency;

pub struct CreditCardBurdenRule;

impl AdvisoryRule for CreditCardBurdenRule {
    fn name(&self) -> &'static str {
        "credit_card_burden"
    }

    // Strictly above the cap; exactly at the cap is acceptable.
    fn evaluate(&self, ctx: &RuleContext<'_>, out: &mut Vec<Advisory>) {
        let income = ctx.snapshot.income;
        let card = ctx.inputs.credit_card;
        let cap = ctx.settings.credit_card_ratio_cap;

        if income > 0.0 && card > cap * income {
            out.push(Advisory::alert(
                AdvisoryTopic::CreditCard,
                format!(
                    "Os gastos no cartão de crédito ({}) passam de {:.0}% da sua renda. Cuidado com o endividamento.",
                    format_currency(card),
                    cap * 100.0
                ),
            ));
        }
    }
}

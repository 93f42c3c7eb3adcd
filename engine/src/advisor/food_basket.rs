// Food spend below the region's minimum food-basket cost.
use shared::{Advisory, AdvisoryTopic};

use super::{AdvisoryRule, RuleContext};
use crate::data::format_currency;

pub struct FoodBasketRule;

impl AdvisoryRule for FoodBasketRule {
    fn name(&self) -> &'static str {
        "food_basket"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, out: &mut Vec<Advisory>) {
        let Some(region) = ctx.inputs.region else {
            return;
        };
        let Some(reference) = ctx.basket.cost_for(region) else {
            return;
        };
        let food = ctx.inputs.food_spend;
        if food <= 0.0 {
            return;
        }

        if food < reference {
            out.push(Advisory::alert(
                AdvisoryTopic::FoodBasket,
                format!(
                    "O gasto com alimentação ({}) está abaixo do custo da cesta básica em {} ({}).",
                    format_currency(food),
                    region.name(),
                    format_currency(reference)
                ),
            ));
        }
    }
}

// Raw form state as typed by the user, and the conversions into the
// snapshot and rule inputs the advisor works on.
use serde::{Deserialize, Serialize};
use shared::{Region, RuleInputs, Snapshot};
use std::collections::BTreeMap;

use crate::data::brazilian_format::parse_amount;
use crate::snapshot::{field_amount, snapshot_from_fields};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum IncomeSource {
    Salary,
    ExtraIncome,
    Benefits,
    Other,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 4] = [
        IncomeSource::Salary,
        IncomeSource::ExtraIncome,
        IncomeSource::Benefits,
        IncomeSource::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncomeSource::Salary => "Salário",
            IncomeSource::ExtraIncome => "Renda extra",
            IncomeSource::Benefits => "Benefícios",
            IncomeSource::Other => "Outras receitas",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Rent,
    Food,
    CreditCard,
    Utilities,
    Transport,
    Health,
    Education,
    Leisure,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Food,
        ExpenseCategory::CreditCard,
        ExpenseCategory::Utilities,
        ExpenseCategory::Transport,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Leisure,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Aluguel",
            ExpenseCategory::Food => "Alimentação",
            ExpenseCategory::CreditCard => "Cartão de crédito",
            ExpenseCategory::Utilities => "Contas (água, luz, internet)",
            ExpenseCategory::Transport => "Transporte",
            ExpenseCategory::Health => "Saúde",
            ExpenseCategory::Education => "Educação",
            ExpenseCategory::Leisure => "Lazer",
            ExpenseCategory::Other => "Outras despesas",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetForm {
    pub incomes: BTreeMap<IncomeSource, String>,
    pub expenses: BTreeMap<ExpenseCategory, String>,
    pub household_size: String,
    pub region: String,
}

impl BudgetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_income(&mut self, source: IncomeSource, raw: impl Into<String>) {
        self.incomes.insert(source, raw.into());
    }

    pub fn set_expense(&mut self, category: ExpenseCategory, raw: impl Into<String>) {
        self.expenses.insert(category, raw.into());
    }

    pub fn income_raw(&self, source: IncomeSource) -> &str {
        self.incomes.get(&source).map(String::as_str).unwrap_or("")
    }

    pub fn expense_raw(&self, category: ExpenseCategory) -> &str {
        self.expenses.get(&category).map(String::as_str).unwrap_or("")
    }

    pub fn expense(&self, category: ExpenseCategory) -> f64 {
        field_amount(self.expenses.get(&category))
    }

    // Whole people only; "2,5" counts as 2, anything unusable as 0 (which
    // the per-person rule treats as "not filled in").
    pub fn household_size(&self) -> u32 {
        let n = parse_amount(self.household_size.as_str()).trunc();
        if n <= 0.0 {
            0
        } else if n >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            n as u32
        }
    }

    pub fn region(&self) -> Option<Region> {
        let code = self.region.trim();
        if code.is_empty() {
            return None;
        }
        match code.parse::<Region>() {
            Ok(region) => Some(region),
            Err(e) => {
                tracing::warn!("Ignoring region selection: {}", e);
                None
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot_from_fields(self.incomes.values(), self.expenses.values())
    }

    pub fn rule_inputs(&self) -> RuleInputs {
        RuleInputs {
            rent: self.expense(ExpenseCategory::Rent),
            credit_card: self.expense(ExpenseCategory::CreditCard),
            household_size: self.household_size(),
            food_spend: self.expense(ExpenseCategory::Food),
            region: self.region(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BudgetForm {
        let mut form = BudgetForm::new();
        form.set_income(IncomeSource::Salary, "2.500,00");
        form.set_income(IncomeSource::ExtraIncome, "500");
        form.set_expense(ExpenseCategory::Rent, "1.000,00");
        form.set_expense(ExpenseCategory::Food, "600,50");
        form.set_expense(ExpenseCategory::CreditCard, "200");
        form.set_expense(ExpenseCategory::Transport, "abc");
        form.household_size = "2".to_string();
        form.region = "sp".to_string();
        form
    }

    #[test]
    fn test_snapshot_sums_fields() {
        let s = filled_form().snapshot();
        assert_eq!(s.income, 3000.0);
        assert_eq!(s.expenses, 1800.5);
        assert_eq!(s.remaining, 1199.5);
    }

    #[test]
    fn test_rule_inputs_pick_categories() {
        let inputs = filled_form().rule_inputs();
        assert_eq!(inputs.rent, 1000.0);
        assert_eq!(inputs.food_spend, 600.5);
        assert_eq!(inputs.credit_card, 200.0);
        assert_eq!(inputs.household_size, 2);
        assert_eq!(inputs.region, Some(Region::SaoPaulo));
    }

    #[test]
    fn test_negative_fields_do_not_reach_snapshot() {
        let mut form = BudgetForm::new();
        form.set_income(IncomeSource::Salary, "-3000");
        form.set_expense(ExpenseCategory::Rent, "-500");
        form.set_expense(ExpenseCategory::Food, "300");

        let s = form.snapshot();
        assert!(s.income >= 0.0 && s.expenses >= 0.0);
        assert_eq!(s.income, 0.0);
        assert_eq!(s.expenses, 300.0);
        assert_eq!(form.rule_inputs().rent, 0.0);
    }

    #[test]
    fn test_empty_form() {
        let form = BudgetForm::new();
        assert_eq!(form.snapshot(), Snapshot::new(0.0, 0.0));
        assert_eq!(form.rule_inputs(), RuleInputs::default());
        assert_eq!(form.expense_raw(ExpenseCategory::Rent), "");
    }

    #[test]
    fn test_household_size_parsing() {
        let mut form = BudgetForm::new();
        for (raw, expected) in [("3", 3), ("2,7", 2), ("", 0), ("-1", 0), ("x", 0), ("0", 0)] {
            form.household_size = raw.to_string();
            assert_eq!(form.household_size(), expected, "household size from {:?}", raw);
        }
    }

    #[test]
    fn test_unknown_region_is_none() {
        let mut form = BudgetForm::new();
        form.region = "ZZ".to_string();
        assert_eq!(form.region(), None);
        form.region = "  ".to_string();
        assert_eq!(form.region(), None);
    }
}

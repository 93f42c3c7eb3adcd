// Engine-side models. The plain snapshot/advisory types live in `shared`.
pub mod form;

pub use form::{BudgetForm, ExpenseCategory, IncomeSource};

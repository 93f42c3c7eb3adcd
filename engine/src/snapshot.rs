// Financial snapshot builder: totals in, {income, expenses, remaining} out.
use shared::Snapshot;

use crate::data::brazilian_format::{parse_amount, RawAmount};

/// Pure and total; `remaining` goes negative when expenses exceed income.
pub fn compute_snapshot(income: f64, expenses: f64) -> Snapshot {
    Snapshot::new(income, expenses)
}

/// A single form field as a snapshot term. Income and expense entries are
/// never negative, so a stray "-" in a field counts as zero.
pub fn field_amount<'a>(raw: impl Into<RawAmount<'a>>) -> f64 {
    parse_amount(raw).max(0.0)
}

/// Sums raw income and expense fields before computing the snapshot.
pub fn snapshot_from_fields<'a, I, E, T, U>(incomes: I, expenses: E) -> Snapshot
where
    I: IntoIterator<Item = T>,
    E: IntoIterator<Item = U>,
    T: Into<RawAmount<'a>>,
    U: Into<RawAmount<'a>>,
{
    let income: f64 = incomes.into_iter().map(field_amount).sum();
    let expenses: f64 = expenses.into_iter().map(field_amount).sum();
    compute_snapshot(income, expenses)
}

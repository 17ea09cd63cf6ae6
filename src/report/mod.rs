//! Aggregates over a set of expenses. All arithmetic stays in `Decimal`
//! so report totals match the stored amounts exactly.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::Expense;

/// Sum of all amounts. Zero for an empty slice.
pub(crate) fn total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category sums, largest first. Ties are broken by category name.
pub(crate) fn by_category(expenses: &[Expense]) -> Vec<(String, Decimal)> {
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        *sums.entry(e.category.clone()).or_default() += e.amount;
    }
    let mut result: Vec<(String, Decimal)> = sums.into_iter().collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result
}

/// Per-month sums keyed "YYYY-MM", in chronological order.
/// Months with no expenses are omitted.
pub(crate) fn monthly_trend(expenses: &[Expense]) -> Vec<(String, Decimal)> {
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        *sums.entry(e.month().to_string()).or_default() += e.amount;
    }
    sums.into_iter().collect()
}

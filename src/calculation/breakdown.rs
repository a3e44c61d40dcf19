//! Per-month breakdown table.

use std::collections::BTreeMap;

use crate::models::{Entry, MonthlyBreakdown, MonthlyBreakdownRow};

/// Groups entries by month key and sums each month, plus a grand total.
///
/// Only months that have entries appear. Rows are ordered by month key,
/// which for `YYYY-MM` keys is chronological order. The incentive column
/// is the sum of the stored `incentive_target` values, not a recomputed
/// figure.
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::monthly_breakdown;
/// use incentive_dashboard::models::Entry;
/// use rust_decimal::Decimal;
///
/// let table = monthly_breakdown(Vec::<&Entry>::new());
/// assert!(table.months.is_empty());
/// assert_eq!(table.total.billing, Decimal::ZERO);
/// ```
pub fn monthly_breakdown<'a, I>(entries: I) -> MonthlyBreakdown
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut by_month: BTreeMap<&str, MonthlyBreakdownRow> = BTreeMap::new();

    for entry in entries {
        let row = by_month
            .entry(entry.month.as_str())
            .or_insert_with(|| MonthlyBreakdownRow {
                month: entry.month.clone(),
                ..MonthlyBreakdownRow::default()
            });
        row.billing = row.billing.saturating_add(entry.billing);
        row.cost = row.cost.saturating_add(entry.cost);
        row.profit = row.profit.saturating_add(entry.profit());
        row.incentive_target = row.incentive_target.saturating_add(entry.incentive_target);
    }

    let months: Vec<MonthlyBreakdownRow> = by_month.into_values().collect();

    let mut total = MonthlyBreakdownRow::default();
    for row in &months {
        total.billing = total.billing.saturating_add(row.billing);
        total.cost = total.cost.saturating_add(row.cost);
        total.profit = total.profit.saturating_add(row.profit);
        total.incentive_target = total.incentive_target.saturating_add(row.incentive_target);
    }

    MonthlyBreakdown { months, total }
}

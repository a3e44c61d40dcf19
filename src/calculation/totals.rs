//! Totals over an entry subset.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::incentive::{IncentivePolicy, calculate_incentive};
use crate::models::{Entry, Stats};

/// Returns `profit / billing`, or zero when billing is not positive or the
/// quotient does not fit in a `Decimal`.
///
/// An empty subset has a margin of exactly zero rather than NaN or an error.
pub fn margin(profit: Decimal, billing: Decimal) -> Decimal {
    if billing > Decimal::ZERO {
        profit.checked_div(billing).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

/// Sums amounts, saturating at the bounds of `Decimal` instead of panicking.
pub(crate) fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sums the incentive of each month bucket in `entries`.
///
/// Entries are grouped by month key first, so the threshold applies once per
/// month and never to a multi-month total or to a single entry.
pub fn monthly_incentive_total<'a, I>(entries: I, policy: &IncentivePolicy) -> Decimal
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut profit_by_month: HashMap<&str, Decimal> = HashMap::new();
    for entry in entries {
        let profit = profit_by_month.entry(entry.month.as_str()).or_default();
        *profit = profit.saturating_add(entry.profit());
    }

    sum_amounts(
        profit_by_month
            .into_values()
            .map(|profit| calculate_incentive(profit, policy)),
    )
}

/// Calculates the totals of an entry subset.
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::{calculate_stats, IncentivePolicy};
/// use incentive_dashboard::models::Entry;
/// use rust_decimal::Decimal;
///
/// let stats = calculate_stats(Vec::<&Entry>::new(), &IncentivePolicy::default());
/// assert_eq!(stats.total_billing, Decimal::ZERO);
/// assert_eq!(stats.avg_margin, Decimal::ZERO);
/// assert_eq!(stats.count, 0);
/// ```
pub fn calculate_stats<'a, I>(entries: I, policy: &IncentivePolicy) -> Stats
where
    I: IntoIterator<Item = &'a Entry>,
{
    let entries: Vec<&Entry> = entries.into_iter().collect();

    let total_billing = sum_amounts(entries.iter().map(|e| e.billing));
    let total_cost = sum_amounts(entries.iter().map(|e| e.cost));
    let total_profit = total_billing.saturating_sub(total_cost);

    Stats {
        total_billing,
        total_cost,
        total_profit,
        total_incentive: monthly_incentive_total(entries.iter().copied(), policy),
        avg_margin: margin(total_profit, total_billing),
        count: entries.len(),
    }
}

//! Per-staff yearly summary.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::incentive::{IncentivePolicy, calculate_incentive};
use super::totals::{margin, sum_amounts};
use crate::models::{Entry, StaffSummary, StaffTotals, StaffYearlySummary};

/// Billing and cost of one (staff, month) bucket.
#[derive(Debug, Default)]
struct MonthBucket {
    billing: Decimal,
    cost: Decimal,
}

/// Summarises a year's entries per staff member.
///
/// Entries are grouped by `name`, then by `month`. Each (name, month) bucket
/// gets its own incentive, and a staff member's yearly incentive is the sum
/// of those monthly amounts. Rows are ordered by total profit, highest
/// first; ties keep the order in which names were first seen.
///
/// # Arguments
///
/// * `entries` - The entries of one year, already person-filtered
/// * `policy` - The incentive policy
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::{staff_yearly_summary, IncentivePolicy};
/// use incentive_dashboard::models::Entry;
/// use rust_decimal::Decimal;
///
/// let entry = |id: i64, profit: i64, month: &str| Entry {
///     id,
///     name: "Ryoji Furukawa".to_string(),
///     sales: "okada".to_string(),
///     affiliation: String::new(),
///     client: String::new(),
///     billing: Decimal::from(profit + 100_000),
///     cost: Decimal::from(100_000),
///     incentive_target: Decimal::ZERO,
///     month: month.to_string(),
/// };
/// let entries = vec![entry(1, 600_000, "2026-01"), entry(2, 400_000, "2026-02")];
///
/// let summary = staff_yearly_summary(&entries, &IncentivePolicy::default());
/// // 20,000 for January plus nothing for February
/// assert_eq!(summary.staff[0].total_incentive, Decimal::from(20_000));
/// assert_eq!(summary.staff[0].month_count, 2);
/// ```
pub fn staff_yearly_summary<'a, I>(entries: I, policy: &IncentivePolicy) -> StaffYearlySummary
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, HashMap<&str, MonthBucket>)> = Vec::new();

    for entry in entries {
        let slot = *index.entry(entry.name.as_str()).or_insert_with(|| {
            groups.push((entry.name.as_str(), HashMap::new()));
            groups.len() - 1
        });
        let bucket = groups[slot]
            .1
            .entry(entry.month.as_str())
            .or_default();
        bucket.billing = bucket.billing.saturating_add(entry.billing);
        bucket.cost = bucket.cost.saturating_add(entry.cost);
    }

    let mut staff: Vec<StaffSummary> = groups
        .into_iter()
        .map(|(name, months)| {
            let mut total_billing = Decimal::ZERO;
            let mut total_cost = Decimal::ZERO;
            let mut total_incentive = Decimal::ZERO;

            for bucket in months.values() {
                total_billing = total_billing.saturating_add(bucket.billing);
                total_cost = total_cost.saturating_add(bucket.cost);
                let profit = bucket.billing.saturating_sub(bucket.cost);
                total_incentive =
                    total_incentive.saturating_add(calculate_incentive(profit, policy));
            }

            let total_profit = total_billing.saturating_sub(total_cost);
            StaffSummary {
                name: name.to_string(),
                total_billing,
                total_cost,
                total_profit,
                avg_margin: margin(total_profit, total_billing),
                total_incentive,
                month_count: months.len(),
            }
        })
        .collect();

    // Stable sort keeps first-seen order on equal profit.
    staff.sort_by(|a, b| b.total_profit.cmp(&a.total_profit));

    let billing = sum_amounts(staff.iter().map(|s| s.total_billing));
    let cost = sum_amounts(staff.iter().map(|s| s.total_cost));
    let profit = billing.saturating_sub(cost);
    let totals = StaffTotals {
        billing,
        cost,
        profit,
        margin: margin(profit, billing),
        incentive: sum_amounts(staff.iter().map(|s| s.total_incentive)),
    };

    StaffYearlySummary { staff, totals }
}

//! Twelve-month time series for a year.

use rust_decimal::Decimal;

use super::incentive::{IncentivePolicy, calculate_incentive};
use crate::models::{Entry, MonthlyData};

/// Number of buckets in a yearly series.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Builds the month-by-month series for `year`.
///
/// The series always has exactly twelve buckets, `YYYY-01` through
/// `YYYY-12` in order, whether or not any entry falls in them. Entries from
/// other years are ignored. Each bucket's incentive is computed from that
/// bucket's profit alone.
///
/// # Arguments
///
/// * `entries` - The person-filtered entries; may span several years
/// * `year` - The 4-digit year to build the series for
/// * `policy` - The incentive policy
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::{monthly_time_series, IncentivePolicy};
/// use incentive_dashboard::models::Entry;
///
/// let series = monthly_time_series(Vec::<&Entry>::new(), "2026", &IncentivePolicy::default());
/// assert_eq!(series.len(), 12);
/// assert_eq!(series[0].month, "2026-01");
/// assert_eq!(series[11].month, "2026-12");
/// assert!(series.iter().all(|m| m.count == 0));
/// ```
pub fn monthly_time_series<'a, I>(
    entries: I,
    year: &str,
    policy: &IncentivePolicy,
) -> Vec<MonthlyData>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut series: Vec<MonthlyData> = (1..=MONTHS_PER_YEAR)
        .map(|month_number| MonthlyData {
            month: format!("{}-{:02}", year, month_number),
            month_number,
            billing: Decimal::ZERO,
            cost: Decimal::ZERO,
            profit: Decimal::ZERO,
            incentive: Decimal::ZERO,
            count: 0,
        })
        .collect();

    for entry in entries {
        if let Some(bucket) = series.iter_mut().find(|m| m.month == entry.month) {
            bucket.billing = bucket.billing.saturating_add(entry.billing);
            bucket.cost = bucket.cost.saturating_add(entry.cost);
            bucket.count += 1;
        }
    }

    for bucket in &mut series {
        bucket.profit = bucket.billing.saturating_sub(bucket.cost);
        bucket.incentive = calculate_incentive(bucket.profit, policy);
    }

    series
}

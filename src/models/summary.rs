//! Aggregate output records.
//!
//! These are the plain records produced by the aggregation engine and
//! consumed by the presentation layer. None of them are persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals over an arbitrary entry subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Sum of `billing`.
    pub total_billing: Decimal,
    /// Sum of `cost`.
    pub total_cost: Decimal,
    /// `total_billing - total_cost`. May be negative.
    pub total_profit: Decimal,
    /// Incentive accrued month by month over the subset.
    pub total_incentive: Decimal,
    /// `total_profit / total_billing`, or zero when billing is not positive.
    pub avg_margin: Decimal,
    /// Number of entries in the subset.
    pub count: usize,
}

/// One calendar month bucket of a yearly time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyData {
    /// The `YYYY-MM` key of this bucket.
    pub month: String,
    /// Calendar month number, 1 to 12.
    pub month_number: u32,
    /// Sum of `billing` in the bucket.
    pub billing: Decimal,
    /// Sum of `cost` in the bucket.
    pub cost: Decimal,
    /// `billing - cost`.
    pub profit: Decimal,
    /// Incentive computed from this bucket's profit.
    pub incentive: Decimal,
    /// Number of entries in the bucket.
    pub count: usize,
}

/// Yearly figures for a single staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSummary {
    /// The staff member.
    pub name: String,
    /// Sum of `billing`.
    pub total_billing: Decimal,
    /// Sum of `cost`.
    pub total_cost: Decimal,
    /// `total_billing - total_cost`.
    pub total_profit: Decimal,
    /// `total_profit / total_billing`, or zero.
    pub avg_margin: Decimal,
    /// Sum of the incentive computed for each active month.
    pub total_incentive: Decimal,
    /// Number of distinct months with at least one entry.
    pub month_count: usize,
}

/// Totals row of the per-staff summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffTotals {
    /// Billing across all staff.
    pub billing: Decimal,
    /// Cost across all staff.
    pub cost: Decimal,
    /// `billing - cost`.
    pub profit: Decimal,
    /// `profit / billing`, or zero.
    pub margin: Decimal,
    /// Sum of the staff incentives.
    pub incentive: Decimal,
}

/// Per-staff yearly summary table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffYearlySummary {
    /// One row per staff member, highest profit first.
    pub staff: Vec<StaffSummary>,
    /// Totals row.
    pub totals: StaffTotals,
}

/// Row of the per-month breakdown table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdownRow {
    /// The `YYYY-MM` key, empty on the grand total row.
    pub month: String,
    /// Sum of `billing`.
    pub billing: Decimal,
    /// Sum of `cost`.
    pub cost: Decimal,
    /// `billing - cost`.
    pub profit: Decimal,
    /// Sum of the stored `incentive_target` values.
    pub incentive_target: Decimal,
}

/// Per-month breakdown table with a grand total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    /// Months with data, ascending.
    pub months: Vec<MonthlyBreakdownRow>,
    /// Grand total over every month.
    pub total: MonthlyBreakdownRow,
}

/// Billing attributed to one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientShare {
    /// The client.
    pub client: String,
    /// Sum of `billing` for that client.
    pub billing: Decimal,
}

/// Coarse margin classification used to highlight entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginTier {
    /// Margin above 15%.
    High,
    /// Margin above 8%, up to 15%.
    Medium,
    /// Margin of 8% or less.
    Low,
}

/// Margin of a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMargin {
    /// The entry id.
    pub id: i64,
    /// The staff member.
    pub name: String,
    /// `(billing - cost) / billing`, or zero.
    pub margin: Decimal,
    /// Tier of `margin`.
    pub tier: MarginTier,
}

/// Progress of one actual figure against its goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMetric {
    /// The actual figure.
    pub actual: Decimal,
    /// The goal.
    pub goal: Decimal,
    /// `actual / goal` clamped to `[0, 1]`, zero when the goal is not positive.
    pub ratio: Decimal,
    /// `ratio` as a whole percentage.
    pub percent: Decimal,
}

/// Progress of the three goal figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Billing against the billing goal.
    pub billing: GoalMetric,
    /// Profit against the profit goal.
    pub profit: GoalMetric,
    /// Computed incentive against the incentive goal.
    pub incentive: GoalMetric,
}

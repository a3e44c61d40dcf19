//! Aggregation and incentive logic for the incentive dashboard.
//!
//! Every function here is pure and total: it takes the entries it needs,
//! performs no I/O, and produces a renderable result for any input,
//! including an empty one. Filters, totals, the twelve-month series, the
//! per-staff and per-month tables, and the incentive formula all live here.

mod breakdown;
mod filter;
mod goal_progress;
mod incentive;
mod insights;
mod monthly_series;
mod staff_summary;
mod totals;

pub use breakdown::monthly_breakdown;
pub use filter::{filter_by_month, filter_by_sales, filter_by_year, select_view};
pub use goal_progress::goal_progress;
pub use incentive::{
    DEFAULT_BASE_THRESHOLD, DEFAULT_INCENTIVE_RATE, IncentivePolicy, calculate_incentive,
};
pub use insights::{
    HIGH_MARGIN_THRESHOLD, MEDIUM_MARGIN_THRESHOLD, available_years, billing_by_client,
    entry_margins, margin_tier, sales_persons,
};
pub use monthly_series::{MONTHS_PER_YEAR, monthly_time_series};
pub use staff_summary::staff_yearly_summary;
pub use totals::{calculate_stats, margin, monthly_incentive_total};

//! Core data models for the incentive dashboard.
//!
//! This module contains all the domain models used throughout the crate.

mod entry;
mod goals;
mod summary;
mod view;

pub use entry::{Entry, MAX_AMOUNT, MAX_AMOUNT_SCALE, NewEntry, is_valid_month_key};
pub use goals::{Goals, Settings};
pub use summary::{
    ClientShare, EntryMargin, GoalMetric, GoalProgress, MarginTier, MonthlyBreakdown,
    MonthlyBreakdownRow, MonthlyData, StaffSummary, StaffTotals, StaffYearlySummary, Stats,
};
pub use view::{ALL_SALES, SalesFilter, ViewFilter, ViewMode};

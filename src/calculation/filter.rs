//! Entry filtering functionality.
//!
//! Filters borrow from the entry collection and never fail: an unknown
//! person, a malformed year or a month with no data simply produces an
//! empty subset.

use crate::models::{Entry, SalesFilter, ViewFilter, ViewMode};

/// Keeps the entries that pass the person filter.
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::filter_by_sales;
/// use incentive_dashboard::models::{Entry, SalesFilter};
/// use rust_decimal::Decimal;
///
/// let entry = Entry {
///     id: 1,
///     name: "Ryo Momose".to_string(),
///     sales: "okada".to_string(),
///     affiliation: String::new(),
///     client: String::new(),
///     billing: Decimal::from(620_000),
///     cost: Decimal::from(480_000),
///     incentive_target: Decimal::ZERO,
///     month: "2025-01".to_string(),
/// };
/// let entries = vec![entry];
///
/// assert_eq!(filter_by_sales(&entries, &SalesFilter::All).len(), 1);
/// assert!(filter_by_sales(&entries, &SalesFilter::from("nobody")).is_empty());
/// ```
pub fn filter_by_sales<'a, I>(entries: I, filter: &SalesFilter) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter(|entry| filter.matches(&entry.sales))
        .collect()
}

/// Keeps the entries whose month key starts with the given 4-character year.
pub fn filter_by_year<'a, I>(entries: I, year: &str) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.month.get(..4) == Some(year))
        .collect()
}

/// Keeps the entries whose month key equals `month` exactly.
pub fn filter_by_month<'a, I>(entries: I, month: &str) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.month == month)
        .collect()
}

/// Applies every selection of a [`ViewFilter`]: person first, then the
/// month or year depending on the view mode.
pub fn select_view<'a, I>(entries: I, view: &ViewFilter) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let by_person = filter_by_sales(entries, &view.sales);
    match view.view {
        ViewMode::Monthly => filter_by_month(by_person, &view.month),
        ViewMode::Yearly => filter_by_year(by_person, &view.year),
    }
}

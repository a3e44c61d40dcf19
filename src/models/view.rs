//! View selection types.
//!
//! A [`ViewFilter`] captures the selections a dashboard user makes: which
//! sales representative to look at and whether to view a single month or a
//! whole year.

use serde::{Deserialize, Serialize};

/// Selector value meaning "every sales representative".
pub const ALL_SALES: &str = "all";

/// Person filter applied to the `sales` field of each entry.
///
/// Serialized as a plain string: `"all"` or the representative's name.
///
/// # Example
///
/// ```
/// use incentive_dashboard::models::SalesFilter;
///
/// assert_eq!(SalesFilter::from("all"), SalesFilter::All);
/// assert_eq!(
///     SalesFilter::from("okada"),
///     SalesFilter::Person("okada".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SalesFilter {
    /// Keep every entry.
    #[default]
    All,
    /// Keep entries whose `sales` equals this value.
    Person(String),
}

impl SalesFilter {
    /// Returns true if an entry with this `sales` value passes the filter.
    pub fn matches(&self, sales: &str) -> bool {
        match self {
            SalesFilter::All => true,
            SalesFilter::Person(person) => person == sales,
        }
    }
}

impl From<&str> for SalesFilter {
    fn from(value: &str) -> Self {
        if value == ALL_SALES {
            SalesFilter::All
        } else {
            SalesFilter::Person(value.to_string())
        }
    }
}

impl From<String> for SalesFilter {
    fn from(value: String) -> Self {
        if value == ALL_SALES {
            SalesFilter::All
        } else {
            SalesFilter::Person(value)
        }
    }
}

impl From<SalesFilter> for String {
    fn from(filter: SalesFilter) -> Self {
        match filter {
            SalesFilter::All => ALL_SALES.to_string(),
            SalesFilter::Person(person) => person,
        }
    }
}

/// Whether the dashboard shows a single month or a whole year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Entries of one `YYYY-MM` month.
    #[default]
    Monthly,
    /// Entries of one `YYYY` year.
    Yearly,
}

/// The full set of user selections for a dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilter {
    /// Person filter.
    #[serde(default)]
    pub sales: SalesFilter,
    /// Month or year view.
    #[serde(default)]
    pub view: ViewMode,
    /// Selected year, used in yearly view.
    #[serde(default)]
    pub year: String,
    /// Selected `YYYY-MM` month, used in monthly view.
    #[serde(default)]
    pub month: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_filter_all_matches_everything() {
        assert!(SalesFilter::All.matches("okada"));
        assert!(SalesFilter::All.matches(""));
    }

    #[test]
    fn test_sales_filter_person_matches_exactly() {
        let filter = SalesFilter::Person("okada".to_string());
        assert!(filter.matches("okada"));
        assert!(!filter.matches("Okada"));
    }

    #[test]
    fn test_sales_filter_serializes_as_string() {
        let json = serde_json::to_string(&SalesFilter::All).unwrap();
        assert_eq!(json, "\"all\"");
        let json = serde_json::to_string(&SalesFilter::Person("okada".to_string())).unwrap();
        assert_eq!(json, "\"okada\"");
    }

    #[test]
    fn test_view_filter_deserializes_with_defaults() {
        let filter: ViewFilter =
            serde_json::from_str(r#"{"view": "yearly", "year": "2026"}"#).unwrap();
        assert_eq!(filter.sales, SalesFilter::All);
        assert_eq!(filter.view, ViewMode::Yearly);
        assert_eq!(filter.year, "2026");
        assert!(filter.month.is_empty());
    }
}

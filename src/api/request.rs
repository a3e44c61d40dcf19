//! Request types for the incentive dashboard API.
//!
//! Entry and goal bodies reuse [`NewEntry`](crate::models::NewEntry) and
//! [`Goals`](crate::models::Goals) directly; this module only holds the
//! query-string shapes.

use serde::{Deserialize, Serialize};

use crate::models::{SalesFilter, ViewFilter, ViewMode};

/// Query parameters selecting a dashboard view.
///
/// When `view` is absent only the person filter applies, so
/// `GET /entries` with no parameters returns every entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewQuery {
    /// `"all"` or a sales representative.
    #[serde(default)]
    pub sales: Option<String>,
    /// `monthly` or `yearly`.
    #[serde(default)]
    pub view: Option<ViewMode>,
    /// Year for yearly view.
    #[serde(default)]
    pub year: Option<String>,
    /// `YYYY-MM` month for monthly view.
    #[serde(default)]
    pub month: Option<String>,
}

impl ViewQuery {
    /// Returns the person filter, defaulting to every representative.
    pub fn sales_filter(&self) -> SalesFilter {
        self.sales
            .as_deref()
            .map(SalesFilter::from)
            .unwrap_or_default()
    }

    /// Returns the full view filter, or `None` when no view mode was given.
    pub fn view_filter(&self) -> Option<ViewFilter> {
        self.view.map(|view| ViewFilter {
            sales: self.sales_filter(),
            view,
            year: self.year.clone().unwrap_or_default(),
            month: self.month.clone().unwrap_or_default(),
        })
    }
}

/// Query parameters of the per-year endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonQuery {
    /// `"all"` or a sales representative.
    #[serde(default)]
    pub sales: Option<String>,
}

impl PersonQuery {
    /// Returns the person filter, defaulting to every representative.
    pub fn sales_filter(&self) -> SalesFilter {
        self.sales
            .as_deref()
            .map(SalesFilter::from)
            .unwrap_or_default()
    }
}

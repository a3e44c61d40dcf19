//! Monthly goals and dashboard settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Target amounts for a single month.
///
/// Goals are only compared against actual figures for display; the
/// aggregation engine never consumes them.
///
/// # Example
///
/// ```
/// use incentive_dashboard::models::Goals;
/// use rust_decimal::Decimal;
///
/// let goals = Goals::default();
/// assert_eq!(goals.billing, Decimal::from(5_000_000));
/// assert_eq!(goals.profit, Decimal::from(800_000));
/// assert_eq!(goals.incentive, Decimal::from(350_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    /// Billing (sales) target.
    pub billing: Decimal,
    /// Profit target.
    pub profit: Decimal,
    /// Incentive target.
    pub incentive: Decimal,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            billing: Decimal::from(5_000_000),
            profit: Decimal::from(800_000),
            incentive: Decimal::from(350_000),
        }
    }
}

/// Per-user dashboard settings.
///
/// Handed explicitly to the operations that need it instead of being read
/// from ambient storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The sales representative using the dashboard, if one has been chosen.
    #[serde(default)]
    pub current_user: Option<String>,
    /// Monthly goals.
    #[serde(default)]
    pub goals: Goals,
}

//! Incentive calculation functionality.
//!
//! This module provides the threshold-and-rate formula that turns a month's
//! profit into an incentive payout.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Default profit threshold below which no incentive accrues (500,000).
pub const DEFAULT_BASE_THRESHOLD: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);

/// Default share of the excess profit paid as incentive (0.20).
pub const DEFAULT_INCENTIVE_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// The tunable parameters of the incentive formula.
///
/// Changing either value changes every derived incentive figure
/// retroactively, since nothing is cached.
///
/// # Example
///
/// ```
/// use incentive_dashboard::calculation::IncentivePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = IncentivePolicy::default();
/// assert_eq!(policy.base_threshold, Decimal::from(500_000));
/// assert_eq!(policy.rate, Decimal::new(20, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentivePolicy {
    /// Profit that must be exceeded before any incentive is paid.
    pub base_threshold: Decimal,
    /// Multiplier applied to the profit above the threshold.
    pub rate: Decimal,
}

impl Default for IncentivePolicy {
    fn default() -> Self {
        Self {
            base_threshold: DEFAULT_BASE_THRESHOLD,
            rate: DEFAULT_INCENTIVE_RATE,
        }
    }
}

/// Calculates the incentive payout for one month's profit.
///
/// The base threshold is subtracted from `profit`. A zero or negative excess
/// pays nothing; otherwise the excess is multiplied by the rate and rounded
/// to a whole amount, with halves rounded away from zero.
///
/// Call this once per month bucket. Summing the monthly results is not the
/// same as applying the formula to a multi-month profit, because each month
/// resets the threshold.
///
/// # Arguments
///
/// * `profit` - The profit of a single month bucket
/// * `policy` - The threshold and rate to apply
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::{calculate_incentive, IncentivePolicy};
/// use rust_decimal::Decimal;
///
/// let policy = IncentivePolicy::default();
///
/// // (1,000,000 - 500,000) x 0.20
/// assert_eq!(
///     calculate_incentive(Decimal::from(1_000_000), &policy),
///     Decimal::from(100_000)
/// );
///
/// // At or below the threshold nothing is paid
/// assert_eq!(calculate_incentive(Decimal::from(500_000), &policy), Decimal::ZERO);
/// assert_eq!(calculate_incentive(Decimal::from(-100_000), &policy), Decimal::ZERO);
/// ```
pub fn calculate_incentive(profit: Decimal, policy: &IncentivePolicy) -> Decimal {
    let excess = profit.saturating_sub(policy.base_threshold);
    if excess <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    excess
        .saturating_mul(policy.rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

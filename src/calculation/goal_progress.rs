//! Progress of actual figures against the monthly goals.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{GoalMetric, GoalProgress, Goals, Stats};

fn goal_metric(actual: Decimal, goal: Decimal) -> GoalMetric {
    let ratio = if goal > Decimal::ZERO {
        // an overflowing quotient is far outside [0, 1] on the side of its sign
        let quotient = actual.checked_div(goal).unwrap_or(if actual.is_sign_negative() {
            Decimal::ZERO
        } else {
            Decimal::ONE
        });
        quotient.clamp(Decimal::ZERO, Decimal::ONE)
    } else {
        Decimal::ZERO
    };
    let percent = (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    GoalMetric {
        actual,
        goal,
        ratio,
        percent,
    }
}

/// Compares billing, profit and computed incentive against the goals.
///
/// Each ratio is clamped to `[0, 1]`. A goal that is zero or negative yields
/// a ratio of zero.
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::goal_progress;
/// use incentive_dashboard::models::{Goals, Stats};
/// use rust_decimal::Decimal;
///
/// let stats = Stats {
///     total_billing: Decimal::from(2_500_000),
///     ..Stats::default()
/// };
/// let progress = goal_progress(&stats, &Goals::default());
/// assert_eq!(progress.billing.percent, Decimal::from(50));
/// ```
pub fn goal_progress(stats: &Stats, goals: &Goals) -> GoalProgress {
    GoalProgress {
        billing: goal_metric(stats.total_billing, goals.billing),
        profit: goal_metric(stats.total_profit, goals.profit),
        incentive: goal_metric(stats.total_incentive, goals.incentive),
    }
}

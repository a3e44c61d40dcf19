//! Secondary dashboard views: selector lists, client share and per-entry
//! margins.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;

use super::totals::margin;
use crate::models::{ClientShare, Entry, EntryMargin, MarginTier, is_valid_month_key};

/// Margin above which an entry is classed [`MarginTier::High`] (15%).
pub const HIGH_MARGIN_THRESHOLD: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Margin above which an entry is classed [`MarginTier::Medium`] (8%).
pub const MEDIUM_MARGIN_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Distinct `sales` values in first-seen order.
pub fn sales_persons<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut persons: Vec<String> = Vec::new();
    for entry in entries {
        if !persons.iter().any(|p| *p == entry.sales) {
            persons.push(entry.sales.clone());
        }
    }
    persons
}

/// Distinct years with data, ascending. Malformed month keys are skipped.
pub fn available_years<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter(|entry| is_valid_month_key(&entry.month))
        .map(|entry| entry.year().to_string())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Billing summed per client, in first-seen client order.
pub fn billing_by_client<'a, I>(entries: I) -> Vec<ClientShare>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut shares: Vec<ClientShare> = Vec::new();

    for entry in entries {
        match index.get(entry.client.as_str()) {
            Some(&slot) => {
                shares[slot].billing = shares[slot].billing.saturating_add(entry.billing)
            }
            None => {
                index.insert(entry.client.as_str(), shares.len());
                shares.push(ClientShare {
                    client: entry.client.clone(),
                    billing: entry.billing,
                });
            }
        }
    }
    shares
}

/// Classifies a margin into a [`MarginTier`].
///
/// # Examples
///
/// ```
/// use incentive_dashboard::calculation::margin_tier;
/// use incentive_dashboard::models::MarginTier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(margin_tier(Decimal::new(20, 2)), MarginTier::High);
/// assert_eq!(margin_tier(Decimal::new(15, 2)), MarginTier::Medium);
/// assert_eq!(margin_tier(Decimal::new(8, 2)), MarginTier::Low);
/// ```
pub fn margin_tier(margin: Decimal) -> MarginTier {
    if margin > HIGH_MARGIN_THRESHOLD {
        MarginTier::High
    } else if margin > MEDIUM_MARGIN_THRESHOLD {
        MarginTier::Medium
    } else {
        MarginTier::Low
    }
}

/// Margin and tier of every entry, in input order.
pub fn entry_margins<'a, I>(entries: I) -> Vec<EntryMargin>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .map(|entry| {
            let value = margin(entry.profit(), entry.billing);
            EntryMargin {
                id: entry.id,
                name: entry.name.clone(),
                margin: value,
                tier: margin_tier(value),
            }
        })
        .collect()
}

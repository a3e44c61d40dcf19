//! Entry model and related types.
//!
//! This module defines the [`Entry`] billing record and the [`NewEntry`]
//! payload used to create or replace one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Largest magnitude accepted for any monetary amount (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Most decimal places accepted for any monetary amount.
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// Returns true if `key` is a syntactically valid `YYYY-MM` month key.
///
/// Only the shape is checked: four ASCII digits, a dash, two ASCII digits.
/// Calendar validity is not enforced, so `"2026-13"` is accepted.
///
/// # Example
///
/// ```
/// use incentive_dashboard::models::is_valid_month_key;
///
/// assert!(is_valid_month_key("2026-01"));
/// assert!(is_valid_month_key("2026-13"));
/// assert!(!is_valid_month_key("2026-1"));
/// assert!(!is_valid_month_key("202601"));
/// ```
pub fn is_valid_month_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// One billing record for a staff member in a given month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned when the entry is added.
    pub id: i64,
    /// The staff member the record belongs to.
    pub name: String,
    /// The sales representative responsible for the record.
    pub sales: String,
    /// The staff member's affiliation or company.
    #[serde(default)]
    pub affiliation: String,
    /// The client the work was billed to.
    #[serde(default)]
    pub client: String,
    /// Revenue for this record.
    pub billing: Decimal,
    /// Cost of goods or services for this record. May exceed `billing`.
    pub cost: Decimal,
    /// Stored incentive figure from the older data entry flow.
    ///
    /// Only the per-month breakdown surfaces it; every other view derives
    /// incentive from profit.
    #[serde(default)]
    pub incentive_target: Decimal,
    /// The month key in `YYYY-MM` form.
    pub month: String,
}

impl Entry {
    /// Builds an entry from a validated payload and an assigned id.
    pub fn from_new(id: i64, new_entry: NewEntry) -> Self {
        Entry {
            id,
            name: new_entry.name,
            sales: new_entry.sales,
            affiliation: new_entry.affiliation,
            client: new_entry.client,
            billing: new_entry.billing,
            cost: new_entry.cost,
            incentive_target: new_entry.incentive_target,
            month: new_entry.month,
        }
    }

    /// Returns `billing - cost` for this record.
    ///
    /// Saturates instead of overflowing, so records that bypassed
    /// [`Entry::validate`] still produce a figure.
    pub fn profit(&self) -> Decimal {
        self.billing.saturating_sub(self.cost)
    }

    /// Applies the same checks as [`NewEntry::validate`] to a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidEntry`] naming the first bad field.
    pub fn validate(&self) -> DashboardResult<()> {
        validate_fields(
            &self.name,
            self.billing,
            self.cost,
            self.incentive_target,
            &self.month,
        )
    }

    /// Returns the year part of the month key, or `""` if the key is too short.
    pub fn year(&self) -> &str {
        self.month.get(..4).unwrap_or("")
    }
}

/// Payload for adding an entry or replacing every field of an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// The staff member the record belongs to.
    pub name: String,
    /// The sales representative responsible for the record.
    pub sales: String,
    /// The staff member's affiliation or company.
    #[serde(default)]
    pub affiliation: String,
    /// The client the work was billed to.
    #[serde(default)]
    pub client: String,
    /// Revenue for this record.
    pub billing: Decimal,
    /// Cost for this record.
    pub cost: Decimal,
    /// Stored incentive figure.
    #[serde(default)]
    pub incentive_target: Decimal,
    /// The month key in `YYYY-MM` form.
    pub month: String,
}

impl NewEntry {
    /// Validates the payload before it is written to a store.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidEntry`] if the name is blank, a
    /// monetary amount is negative, larger than [`MAX_AMOUNT`] or finer than
    /// [`MAX_AMOUNT_SCALE`] decimal places, or the month key is malformed.
    pub fn validate(&self) -> DashboardResult<()> {
        validate_fields(
            &self.name,
            self.billing,
            self.cost,
            self.incentive_target,
            &self.month,
        )
    }
}

fn validate_fields(
    name: &str,
    billing: Decimal,
    cost: Decimal,
    incentive_target: Decimal,
    month: &str,
) -> DashboardResult<()> {
    if name.trim().is_empty() {
        return Err(invalid("name", "must not be empty"));
    }
    if billing < Decimal::ZERO {
        return Err(invalid("billing", "must not be negative"));
    }
    if cost < Decimal::ZERO {
        return Err(invalid("cost", "must not be negative"));
    }
    check_amount("billing", billing)?;
    check_amount("cost", cost)?;
    check_amount("incentive_target", incentive_target)?;
    if !is_valid_month_key(month) {
        return Err(invalid(
            "month",
            &format!("expected YYYY-MM, got '{}'", month),
        ));
    }
    Ok(())
}

fn check_amount(field: &str, amount: Decimal) -> DashboardResult<()> {
    if amount.abs() > MAX_AMOUNT {
        return Err(invalid(
            field,
            &format!("must not exceed {} in magnitude", MAX_AMOUNT),
        ));
    }
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(invalid(
            field,
            &format!("must have at most {} decimal places", MAX_AMOUNT_SCALE),
        ));
    }
    Ok(())
}

impl From<Entry> for NewEntry {
    fn from(entry: Entry) -> Self {
        NewEntry {
            name: entry.name,
            sales: entry.sales,
            affiliation: entry.affiliation,
            client: entry.client,
            billing: entry.billing,
            cost: entry.cost,
            incentive_target: entry.incentive_target,
            month: entry.month,
        }
    }
}

fn invalid(field: &str, message: &str) -> DashboardError {
    DashboardError::InvalidEntry {
        field: field.to_string(),
        message: message.to_string(),
    }
}

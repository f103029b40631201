use serde::{Deserialize, Serialize};

use crate::models::errors::EntryError;
use crate::types::validate_entry_amount;

/// Column names of the persisted file, in their fixed order.
pub const FIELD_NAMES: [&str; 4] = ["description", "category", "amount", "date"];

/// A single spending record, exactly as it is persisted.
///
/// Every field is kept as text. The amount is only interpreted when records are
/// aggregated, and the date is never interpreted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-form note describing the purchase.
    pub description: String,
    /// Raw category label; grouping normalizes it, storage does not.
    pub category: String,
    /// Amount text, possibly decorated (e.g. `$7.25`) in hand-edited files.
    pub amount: String,
    /// Expected as `YYYY-MM-DD`, stored opaquely.
    pub date: String
}

impl Transaction {
    /// Builds a record from user input, applying the entry form rules.
    ///
    /// # Errors
    /// Returns `EntryError` if any field is blank or the amount is not a plain
    /// decimal number.
    pub fn new(description: &str, category: &str, amount: &str, date: &str) -> Result<Self, EntryError> {
        let fields = [description, category, amount, date];

        if let Some(index) = fields.iter().position(|value| value.trim().is_empty()) {
            return Err(EntryError::MissingField { field: FIELD_NAMES[index] });
        }

        validate_entry_amount(amount)?;

        Ok(Self {
            description: description.to_string(),
            category: category.to_string(),
            amount: amount.to_string(),
            date: date.to_string()
        })
    }
}

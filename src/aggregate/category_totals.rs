use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::Transaction;
use crate::types::{parse_amount, AmountError};

/// Lowercases and trims a raw category so that `" Food "` and `"FOOD"` share a bucket.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Spending per normalized category, plus the raw amounts that could not be counted.
///
/// Categories are kept in the order they were first seen in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    totals: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
    skipped: Vec<String>
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the bucket for `category`, creating it at the end if new.
    ///
    /// # Errors
    /// Returns `AmountError::Overflow` and leaves the bucket unchanged if the sum
    /// does not fit in a `Decimal`.
    pub fn add(&mut self, category: String, amount: Decimal) -> Result<(), AmountError> {
        match self.index.get(&category) {
            Some(&position) => {
                let total = &mut self.totals[position].1;
                *total = total.checked_add(amount).ok_or(AmountError::Overflow)?;
            }
            None => {
                self.index.insert(category.clone(), self.totals.len());
                self.totals.push((category, amount));
            }
        }

        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index.get(category).map(|&position| self.totals[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.totals.iter().map(|(category, total)| (category.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Raw amount text of every record left out of the totals.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

/// Groups transactions by normalized category and sums their amounts.
///
/// Records whose amount cannot be parsed, or would overflow their category
/// total, are left out and listed in [`CategoryTotals::skipped`]; the rest are
/// still totalled.
pub fn aggregate_by_category(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();

    for transaction in transactions {
        let result = parse_amount(&transaction.amount)
            .and_then(|amount| totals.add(normalize_category(&transaction.category), amount));

        if let Err(error) = result {
            warn!("Skipping invalid amount value for [{}]: {error}", transaction.description);
            totals.skipped.push(transaction.amount.clone());
        }
    }

    totals
}

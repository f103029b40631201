use crate::types::AmountError;
use thiserror::Error;

/// Reasons a user-entered transaction is refused before it reaches a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("Please fill in all fields: [{field}] is empty")]
    MissingField {
        field: &'static str
    },
    #[error("Please enter a valid numeric value for the amount: {0}")]
    InvalidAmount(#[from] AmountError)
}

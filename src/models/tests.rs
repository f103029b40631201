use super::{EntryError, Transaction, FIELD_NAMES};

use anyhow::Result;

use crate::types::AmountError;

#[test]
fn test_new_transaction_keeps_fields_as_entered() -> Result<()> {
    let transaction = Transaction::new("Weekly shop", "Groceries", "54.20", "2024-03-02")?;

    assert_eq!(transaction.description, "Weekly shop");
    assert_eq!(transaction.category, "Groceries");
    assert_eq!(transaction.amount, "54.20");
    assert_eq!(transaction.date, "2024-03-02");

    Ok(())
}

#[test]
fn test_new_transaction_rejects_blank_fields() {
    let result = Transaction::new("Weekly shop", "   ", "54.20", "2024-03-02");
    assert_eq!(result, Err(EntryError::MissingField { field: "category" }));

    let result = Transaction::new("", "Groceries", "54.20", "");
    assert_eq!(result, Err(EntryError::MissingField { field: "description" }));

    let result = Transaction::new("Weekly shop", "Groceries", "54.20", "");
    assert_eq!(result, Err(EntryError::MissingField { field: "date" }));
}

#[test]
fn test_new_transaction_rejects_non_numeric_amount() {
    let result = Transaction::new("Cinema", "Entertainment", "twelve", "2024-03-02");

    assert_eq!(result, Err(EntryError::InvalidAmount(AmountError::InvalidEntry { raw: "twelve".to_string() })));
}

#[test]
fn test_new_transaction_accepts_refunds() -> Result<()> {
    let transaction = Transaction::new("Returned jacket", "Clothing", "-80.00", "2024-03-05")?;

    assert_eq!(transaction.amount, "-80.00");

    Ok(())
}

#[test]
fn test_field_names_follow_persisted_column_order() {
    assert_eq!(FIELD_NAMES, ["description", "category", "amount", "date"]);
}

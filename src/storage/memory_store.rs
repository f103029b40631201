use std::cell::RefCell;

use crate::models::Transaction;
use crate::storage::errors::StoreError;
use crate::storage::{RecordStore, ResetOutcome};

/// In-process store with the same semantics as [`super::CsvStore`].
///
/// `None` plays the role of a missing file, so clearing a store that was never
/// written to reports [`ResetOutcome::NothingToClear`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Option<Vec<Transaction>>>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.records.borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(transaction.clone());

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.records.borrow().clone().unwrap_or_default())
    }

    fn clear(&self) -> Result<ResetOutcome, StoreError> {
        match self.records.borrow_mut().take() {
            Some(_) => Ok(ResetOutcome::Cleared),
            None => Ok(ResetOutcome::NothingToClear)
        }
    }
}

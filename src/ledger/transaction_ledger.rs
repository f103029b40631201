use tracing::debug;

use crate::aggregate::{aggregate_by_category, CategoryTotals};
use crate::models::Transaction;
use crate::storage::{RecordStore, ResetOutcome, StoreError};

/// Cached view of a [`RecordStore`] owned by whatever drives the application.
///
/// The cache is reloaded from the store after every mutating call, so it always
/// reflects what is persisted. A failed call leaves the cache untouched.
pub struct Ledger<S: RecordStore> {
    store: S,
    transactions: Vec<Transaction>
}

impl<S: RecordStore> Ledger<S> {
    /// Wraps `store` and performs the initial load.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let transactions = store.load_all()?;

        Ok(Self { store, transactions })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Persists `transaction`, then refreshes the cache.
    pub fn add(&mut self, transaction: &Transaction) -> Result<(), StoreError> {
        self.store.append(transaction)?;
        self.refresh()
    }

    /// Clears the store, then refreshes the cache.
    pub fn reset(&mut self) -> Result<ResetOutcome, StoreError> {
        let outcome = self.store.clear()?;
        self.refresh()?;

        Ok(outcome)
    }

    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.transactions = self.store.load_all()?;
        debug!("Ledger refreshed with [{}] transactions", self.transactions.len());

        Ok(())
    }

    /// Totals per normalized category over the cached transactions.
    pub fn category_totals(&self) -> CategoryTotals {
        aggregate_by_category(&self.transactions)
    }
}

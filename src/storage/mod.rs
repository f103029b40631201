mod csv_store;
mod errors;
mod memory_store;

use crate::models::Transaction;

pub use csv_store::CsvStore;
pub use errors::StoreError;
pub use memory_store::MemoryStore;

/// Result of a full reset, so callers can word their feedback differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Cleared,
    NothingToClear
}

/// Append-only persistence for transaction records.
///
/// Records are never edited or reordered; `clear` is the only destructive call
/// and removes everything at once.
pub trait RecordStore {
    fn append(&self, transaction: &Transaction) -> Result<(), StoreError>;
    fn load_all(&self) -> Result<Vec<Transaction>, StoreError>;
    fn clear(&self) -> Result<ResetOutcome, StoreError>;
}

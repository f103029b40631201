//! Core of a personal spending tracker: an append-only CSV record store and
//! per-category aggregation of the stored amounts.

pub mod aggregate;
pub mod config;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod types;

pub use aggregate::{aggregate_by_category, normalize_category, CategoryTotals};
pub use ledger::Ledger;
pub use models::{EntryError, Transaction};
pub use storage::{CsvStore, MemoryStore, RecordStore, ResetOutcome, StoreError};

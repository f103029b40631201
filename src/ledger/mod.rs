mod transaction_ledger;

pub use transaction_ledger::Ledger;

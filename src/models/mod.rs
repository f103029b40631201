mod errors;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::EntryError;
pub use transaction::{Transaction, FIELD_NAMES};

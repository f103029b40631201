mod amount;
mod errors;
#[cfg(test)]
mod tests;

pub use amount::{parse_amount, sanitize_amount, validate_entry_amount};
pub use errors::AmountError;

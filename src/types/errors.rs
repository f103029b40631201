use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: [{raw}] has no numeric content")]
    Empty {
        raw: String
    },
    #[error("Amount error: [{raw}] is not a valid decimal ({reason})")]
    InvalidDecimal {
        raw: String,
        reason: String
    },
    #[error("Amount error: Overflow")]
    Overflow,
    #[error("Amount error: [{raw}] must be digits with an optional sign and a single decimal point")]
    InvalidEntry {
        raw: String
    }
}

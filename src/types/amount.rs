use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Characters that survive [`sanitize_amount`]. Everything else (currency symbols,
/// thousands separators, whitespace) is dropped before parsing.
fn is_amount_char(character: char) -> bool {
    character.is_ascii_digit() || character == '.' || character == '-'
}

/// First stage of amount parsing: reduce raw text to its numeric characters.
///
/// The result is not guaranteed to be a valid number; `"1.2.3"` and `"1-2"` pass
/// through unchanged and are rejected by [`parse_amount`].
pub fn sanitize_amount(raw: &str) -> String {
    raw.chars().filter(|character| is_amount_char(*character)).collect()
}

/// Second stage of amount parsing: sanitize, then parse to a [`Decimal`].
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let sanitized = sanitize_amount(raw);

    if sanitized.is_empty() {
        return Err(AmountError::Empty { raw: raw.to_string() });
    }

    Decimal::from_str(&sanitized).map_err(|error| AmountError::InvalidDecimal {
        raw: raw.to_string(),
        reason: error.to_string()
    })
}

/// Strict check applied to amounts typed in by the user, before anything is stored.
///
/// Accepts an optional leading `-`, then digits with at most one `.` which must be
/// followed by at least one digit: `"12"`, `"12.50"`, `".5"`, `"-3.20"`.
pub fn validate_entry_amount(raw: &str) -> Result<(), AmountError> {
    let invalid = || AmountError::InvalidEntry { raw: raw.to_string() };

    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None)
    };

    if !integer.chars().all(|character| character.is_ascii_digit()) {
        return Err(invalid());
    }

    match fraction {
        Some(fraction) if fraction.is_empty() || !fraction.chars().all(|character| character.is_ascii_digit()) => Err(invalid()),
        None if integer.is_empty() => Err(invalid()),
        _ => Ok(())
    }
}

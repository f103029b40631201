use super::{parse_amount, sanitize_amount, validate_entry_amount, AmountError};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_sanitize_strips_currency_symbols_and_separators() {
    let test_cases = vec![
        ("$7.25", "7.25"),
        ("  12.50 ", "12.50"),
        ("1,234.56", "1234.56"),
        ("USD 40", "40"),
        ("abc", ""),
        ("$-7.25", "-7.25"),
        ("-$7.25", "-7.25"),
    ];

    for (raw, expected) in test_cases {
        assert_eq!(sanitize_amount(raw), expected);
    }
}

#[test]
fn test_parse_amount_accepts_decorated_values() -> Result<()> {
    assert_eq!(parse_amount("$7.25")?, Decimal::from_str("7.25")?);
    assert_eq!(parse_amount("12.50")?, Decimal::from_str("12.5")?);
    assert_eq!(parse_amount("€1,000")?, Decimal::from_str("1000")?);

    Ok(())
}

#[test]
fn test_parse_amount_keeps_negative_sign_for_refunds() -> Result<()> {
    assert_eq!(parse_amount("-15.00")?, Decimal::from_str("-15")?);
    assert_eq!(parse_amount("-$4.10")?, Decimal::from_str("-4.10")?);

    Ok(())
}

#[test]
fn test_parse_amount_rejects_values_without_a_number() {
    assert!(matches!(parse_amount("abc"), Err(AmountError::Empty { .. })));
    assert!(matches!(parse_amount(""), Err(AmountError::Empty { .. })));
    assert!(matches!(parse_amount("1.2.3"), Err(AmountError::InvalidDecimal { .. })));
}

#[test]
fn test_parse_amount_error_reports_the_raw_value() {
    let error = parse_amount("n/a").unwrap_err();

    assert_eq!(error, AmountError::Empty { raw: "n/a".to_string() });
    assert!(error.to_string().contains("[n/a]"));
}

#[test]
fn test_entry_amount_validation_matches_form_rules() {
    for valid in ["12", "12.50", ".5", "0", "-3.20"] {
        assert!(validate_entry_amount(valid).is_ok(), "{valid} should be accepted");
    }

    for invalid in ["", "12.", "1.2.3", "$5", "abc", "-", "1-2", " 4"] {
        assert!(validate_entry_amount(invalid).is_err(), "{invalid} should be rejected");
    }
}

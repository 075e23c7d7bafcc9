use std::fmt;

use rust_decimal::Decimal;

/// Amounts are exact decimals to avoid floating-point drift in the running
/// balances that chain through a month.
pub type Amount = Decimal;

/// Parse a form-field amount. An empty or whitespace-only field means "not
/// provided" and yields zero; anything else must be a non-negative decimal.
/// Example: "" -> 0, "1000" -> 1000, "12.5" -> 12.5
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Amount::ZERO);
    }

    let amount: Decimal = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;
    if amount < Decimal::ZERO {
        return Err(ParseAmountError::Negative);
    }
    Ok(amount)
}

/// Format an amount for table display, with trailing zeros stripped.
/// Example: 950.00 -> "950", 12.50 -> "12.5"
pub fn format_amount(amount: Amount) -> String {
    amount.normalize().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    Negative,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid decimal amount"),
            ParseAmountError::Negative => write!(f, "amount must not be negative"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000"), Ok(Amount::from(1000)));
        assert_eq!(parse_amount("12.5"), Ok("12.5".parse().unwrap()));
        assert_eq!(parse_amount("0.01"), Ok("0.01".parse().unwrap()));
        assert_eq!(parse_amount("0"), Ok(Amount::ZERO));
    }

    #[test]
    fn test_parse_amount_empty_defaults_to_zero() {
        assert_eq!(parse_amount(""), Ok(Amount::ZERO));
        assert_eq!(parse_amount("   "), Ok(Amount::ZERO));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount("abc"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("12.3.4"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("-50"), Err(ParseAmountError::Negative));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("950.00".parse().unwrap()), "950");
        assert_eq!(format_amount("12.50".parse().unwrap()), "12.5");
        assert_eq!(format_amount(Amount::ZERO), "0");
    }
}

//! Amount type for handling monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles
//! parsing values that may or may not include a dollar sign and commas.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// Represents a dollar amount.
///
/// This type wraps `Decimal` so that sums never accumulate binary floating
/// point error. Parsing accepts an optional dollar sign and comma separators;
/// in the data file an amount is stored as a plain JSON number.
///
/// # Examples
///
/// Parsing with dollar sign:
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("$1,250.50").unwrap();
/// assert_eq!(amount.to_string(), "$1,250.50");
/// ```
///
/// Parsing without dollar sign:
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("25.5").unwrap();
/// assert_eq!(amount.to_string(), "$25.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.value().is_sign_negative() && !self.is_zero()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Remove the dollar sign if present: "-$50.00", "$50.00" or "50.00"
        let without_dollar = if let Some(after_minus) = trimmed.strip_prefix("-$") {
            format!("-{after_minus}")
        } else if let Some(after_dollar) = trimmed.strip_prefix('$') {
            after_dollar.to_string()
        } else {
            trimmed.to_string()
        };

        // Remove commas (thousand separators)
        let without_commas = without_dollar.replace(',', "");

        let value = Decimal::from_str(&without_commas)?;
        Ok(Amount::new(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, num) = if self.is_negative() {
            ("-", self.value().abs())
        } else {
            ("", self.value())
        };
        write!(
            f,
            "{sign}${}",
            format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
        )
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a bare number, the format the data file expects
        let value = self.value.to_f64().ok_or_else(|| {
            serde::ser::Error::custom(format!("Unrepresentable amount {}", self.value))
        })?;
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        let value = Decimal::from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("'{value}' is not a representable amount"))
        })?;
        Ok(Amount::new(value))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount::new(iter.map(|amount| amount.value).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_dollar_sign() {
        let amount = Amount::from_str("$50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_without_dollar_sign() {
        let amount = Amount::from_str("50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_negative_with_dollar_sign() {
        let amount = Amount::from_str("-$50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_parse_with_commas() {
        let amount = Amount::from_str("$1,234,567.89").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("1234567.89").unwrap());
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::from_str("  $50.00  ").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_empty_string_fails() {
        assert!(Amount::from_str("").is_err());
        assert!(Amount::from_str("   ").is_err());
    }

    #[test]
    fn test_parse_non_numeric_fails() {
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("12.3.4").is_err());
    }

    #[test]
    fn test_display() {
        let amount = Amount::from_str("1234.5").unwrap();
        assert_eq!(amount.to_string(), "$1,234.50");
    }

    #[test]
    fn test_display_negative() {
        let amount = Amount::from_str("-50").unwrap();
        assert_eq!(amount.to_string(), "-$50.00");
    }

    #[test]
    fn test_display_zero() {
        let amount = Amount::new(Decimal::ZERO);
        assert_eq!(amount.to_string(), "$0.00");
    }

    #[test]
    fn test_serialize_as_number() {
        let amount = Amount::from_str("25.5").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "25.5");
    }

    #[test]
    fn test_deserialize_number() {
        let amount: Amount = serde_json::from_str("25.5").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("25.5").unwrap());
    }

    #[test]
    fn test_deserialize_integer() {
        let amount: Amount = serde_json::from_str("15").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("15").unwrap());
    }

    #[test]
    fn test_deserialize_string_fails() {
        assert!(serde_json::from_str::<Amount>("\"25.5\"").is_err());
    }

    #[test]
    fn test_zero_is_not_negative() {
        let zero = Amount::from_str("-0.00").unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_is_negative() {
        assert!(Amount::from_str("-0.01").unwrap().is_negative());
        assert!(!Amount::from_str("0.01").unwrap().is_negative());
    }

    #[test]
    fn test_sum() {
        let total: Amount = ["25.50", "15.00"]
            .iter()
            .map(|s| Amount::from_str(s).unwrap())
            .sum();
        assert_eq!(total.value(), Decimal::from_str("40.50").unwrap());
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Amount = std::iter::empty::<Amount>().sum();
        assert!(total.is_zero());
    }
}

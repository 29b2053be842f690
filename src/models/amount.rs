//! Amount type for representing currency values
//!
//! Amounts are kept at full `f64` precision. Rounding to cents happens only
//! when an amount is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount in currency units (e.g. `12.5` is twelve and a half)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts plain decimal text such as `"12"`, `"12.50"` or `" 0.99 "`, with
    /// an optional leading `$`. Text that is not a finite number is rejected
    /// rather than coerced.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let value: f64 = digits
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(trimmed.to_string()));
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol, rounded to two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0.0 {
            format!("-{}{:.2}", symbol, -self.0)
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// Folds left to right so equal inputs always give bit-identical sums.
impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("12.50").unwrap().value(), 12.5);
        assert_eq!(Amount::parse(" 7 ").unwrap().value(), 7.0);
        assert_eq!(Amount::parse("$3.25").unwrap().value(), 3.25);
        assert_eq!(Amount::parse("-4").unwrap().value(), -4.0);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("12abc").is_err());
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("inf").is_err());
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(Amount::new(10.5).to_string(), "$10.50");
        assert_eq!(Amount::new(0.0).to_string(), "$0.00");
        assert_eq!(Amount::new(1.005e1).format_with_symbol("€"), "€10.05");
        assert_eq!(Amount::new(-3.0).to_string(), "-$3.00");
    }

    #[test]
    fn test_sum_is_left_to_right() {
        let values = [0.1, 0.2, 0.3, 1e16, -1e16];
        let expected = values.iter().fold(0.0_f64, |acc, v| acc + v);
        let total: Amount = values.iter().map(|v| Amount::new(*v)).sum();
        assert_eq!(total.value().to_bits(), expected.to_bits());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Amount::new(50.0)).unwrap(), "50.0");
        let parsed: Amount = serde_json::from_str("20").unwrap();
        assert_eq!(parsed.value(), 20.0);
    }
}

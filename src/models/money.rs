//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Ledger amounts are always non-negative: expenses record what was
//! paid and what cashback was received, never a signed flow. Parsing rejects
//! negative values so invalid amounts are stopped at the ingestion boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendlens::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The amount in fractional dollars, for percentage math and CSV export
    pub fn as_dollars_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "$10.50", "1,234.56", "10". Negative amounts
    /// are rejected; expense ledgers never contain them.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        if s.starts_with('-') || s.starts_with('(') {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        // Remove currency symbol and thousands separators
        let cleaned: String = s
            .strip_prefix('$')
            .unwrap_or(s)
            .chars()
            .filter(|c| *c != ',')
            .collect();

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if let Some((whole, frac)) = cleaned.split_once('.') {
            let dollars: i64 = whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fraction to 2 digits
            let cents: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                // get() instead of indexing: a multibyte character at the cut
                // point must yield a parse error, not a panic
                _ => frac
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            dollars * 100 + cents
        } else {
            // Integer format - assume dollars
            cleaned
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        if cents < 0 {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        Ok(Self(cents))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Negative(s) => write!(f, "Negative amount not allowed: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1,234.56").unwrap().cents(), 123456);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(
            Money::parse("-10.50"),
            Err(MoneyParseError::Negative("-10.50".to_string()))
        );
        assert!(matches!(
            Money::parse("(50.00)"),
            Err(MoneyParseError::Negative(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse(""),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_multibyte_fraction_without_panicking() {
        // "é" is two bytes; slicing the fraction at byte 2 would split it
        assert!(matches!(
            Money::parse("1.5é"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("1.é"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("1.éé5"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);

        let total: Money = vec![a, b, Money::from_cents(300)].into_iter().sum();
        assert_eq!(total.cents(), 1800);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}

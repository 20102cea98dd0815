//! Expense record model
//!
//! One financial transaction in the ledger: what was bought, when, how it was
//! paid, and any cashback received. Records are immutable once ingested; all
//! reports consume them read-only.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::priority::Priority;

/// A single expense transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Transaction date
    pub date: NaiveDate,

    /// Spending category (open vocabulary: Food, Transportation, Bills, ...)
    pub category: String,

    /// How the expense was paid (Cash, Online, ...)
    pub payment_mode: String,

    /// Free-text description; grouping key for recurrence reports
    pub description: String,

    /// Amount paid, non-negative
    pub amount_paid: Money,

    /// Cashback received, non-negative and at most `amount_paid`
    pub cashback: Money,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        payment_mode: impl Into<String>,
        description: impl Into<String>,
        amount_paid: Money,
        cashback: Money,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            payment_mode: payment_mode.into(),
            description: description.into(),
            amount_paid,
            cashback,
        }
    }

    /// Calendar month of the transaction (1-12), derived from `date`
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Weekday index of the transaction, 0=Sunday through 6=Saturday
    ///
    /// Matches SQLite's `strftime('%w')` convention so weekday reports stay
    /// comparable across tools.
    pub fn weekday_index(&self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }

    /// Check if this transaction earned cashback
    pub fn has_cashback(&self) -> bool {
        !self.cashback.is_zero()
    }

    /// Priority classification derived from the category
    pub fn priority(&self) -> Priority {
        Priority::classify(&self.category)
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount_paid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(y: i32, m: u32, d: u32, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category,
            "Cash",
            "Test purchase",
            Money::from_cents(10000),
            Money::zero(),
        )
    }

    #[test]
    fn test_month_derived_from_date() {
        assert_eq!(record(2024, 1, 5, "Food").month(), 1);
        assert_eq!(record(2024, 12, 28, "Food").month(), 12);
    }

    #[test]
    fn test_weekday_index_sunday_is_zero() {
        // 2024-01-07 was a Sunday, 2024-01-13 a Saturday
        assert_eq!(record(2024, 1, 7, "Groceries").weekday_index(), 0);
        assert_eq!(record(2024, 1, 13, "Groceries").weekday_index(), 6);
        assert_eq!(record(2024, 1, 8, "Groceries").weekday_index(), 1);
    }

    #[test]
    fn test_has_cashback() {
        let mut r = record(2024, 3, 1, "Food");
        assert!(!r.has_cashback());
        r.cashback = Money::from_cents(250);
        assert!(r.has_cashback());
    }

    #[test]
    fn test_priority_classification() {
        assert_eq!(record(2024, 1, 1, "Bills").priority(), Priority::High);
        assert_eq!(record(2024, 1, 1, "Groceries").priority(), Priority::High);
        assert_eq!(record(2024, 1, 1, "Travel").priority(), Priority::Low);
    }

    #[test]
    fn test_display() {
        let r = record(2024, 1, 5, "Food");
        assert_eq!(format!("{}", r), "2024-01-05 Test purchase (Food) $100.00");
    }

    #[test]
    fn test_serialization_round_trip() {
        let r = record(2024, 6, 15, "Entertainment");
        let json = serde_json::to_string(&r).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

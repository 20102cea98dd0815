//! Synthetic ledger generation
//!
//! Produces fake expense records for demos and testing: categories from a
//! fixed vocabulary, Cash/Online payment modes, amounts uniform in
//! [$10.00, $500.00], and a 30% chance per record of earning 5% cashback.
//! Dates land on days 1-28 of each requested month. Seedable so tests get
//! reproducible ledgers.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{LensError, LensResult};
use crate::models::{ExpenseRecord, Money};

/// Category vocabulary used by the generator
pub const CATEGORIES: [&str; 8] = [
    "Food",
    "Transportation",
    "Bills",
    "Groceries",
    "Subscriptions",
    "Entertainment",
    "Travel",
    "Gifts",
];

/// Payment modes used by the generator
pub const PAYMENT_MODES: [&str; 2] = ["Cash", "Online"];

// Fixed phrase pool rather than random sentences: repeats are what make the
// recurrence reports worth demoing.
const DESCRIPTIONS: [&str; 16] = [
    "Monthly rent",
    "Electricity bill",
    "Phone bill",
    "Internet bill",
    "Weekly grocery run",
    "Corner store top-up",
    "Streaming subscription",
    "Gym membership",
    "Bus pass",
    "Taxi ride",
    "Restaurant dinner",
    "Coffee and pastries",
    "Movie night",
    "Flight tickets",
    "Hotel stay",
    "Birthday gift",
];

/// Configuration for the synthetic generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Year the ledger covers
    pub year: i32,
    /// Number of months to generate, starting from January (1-12)
    pub months: u32,
    /// Records per month
    pub per_month: usize,
    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            year: 2024,
            months: 12,
            per_month: 100,
            seed: None,
        }
    }
}

/// Generate a synthetic ledger
pub fn generate_ledger(config: &GeneratorConfig) -> LensResult<Vec<ExpenseRecord>> {
    if config.months == 0 || config.months > 12 {
        return Err(LensError::Validation(format!(
            "months must be between 1 and 12, got {}",
            config.months
        )));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut records = Vec::with_capacity(config.months as usize * config.per_month);
    for month in 1..=config.months {
        for _ in 0..config.per_month {
            records.push(random_record(&mut rng, config.year, month)?);
        }
    }

    Ok(records)
}

fn random_record(rng: &mut StdRng, year: i32, month: u32) -> LensResult<ExpenseRecord> {
    // Day 28 is the latest day every month has
    let day = rng.gen_range(1..=28);
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        LensError::Validation(format!("year {} is out of calendar range", year))
    })?;

    let category = *CATEGORIES.choose(rng).unwrap_or(&CATEGORIES[0]);
    let payment_mode = *PAYMENT_MODES.choose(rng).unwrap_or(&PAYMENT_MODES[0]);
    let description = *DESCRIPTIONS.choose(rng).unwrap_or(&DESCRIPTIONS[0]);

    let amount_paid = Money::from_cents(rng.gen_range(1_000..=50_000));
    let cashback = if rng.gen_bool(0.3) {
        Money::from_cents((amount_paid.cents() as f64 * 0.05).round() as i64)
    } else {
        Money::zero()
    };

    Ok(ExpenseRecord::new(
        date,
        category,
        payment_mode,
        description,
        amount_paid,
        cashback,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn config(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            year: 2024,
            months: 3,
            per_month: 50,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_record_count_and_months() {
        let records = generate_ledger(&config(42)).unwrap();
        assert_eq!(records.len(), 150);

        for record in &records {
            assert!((1..=3).contains(&record.month()));
            assert!((1..=28).contains(&record.date.day()));
            assert_eq!(record.date.year(), 2024);
        }
    }

    #[test]
    fn test_amounts_in_range() {
        let records = generate_ledger(&config(7)).unwrap();
        for record in &records {
            assert!(record.amount_paid.cents() >= 1_000);
            assert!(record.amount_paid.cents() <= 50_000);
            assert!(record.cashback <= record.amount_paid);
        }
    }

    #[test]
    fn test_cashback_is_five_percent_or_zero() {
        let records = generate_ledger(&config(11)).unwrap();
        for record in &records {
            if record.has_cashback() {
                let expected = (record.amount_paid.cents() as f64 * 0.05).round() as i64;
                assert_eq!(record.cashback.cents(), expected);
            }
        }
    }

    #[test]
    fn test_vocabulary() {
        let records = generate_ledger(&config(3)).unwrap();
        for record in &records {
            assert!(CATEGORIES.contains(&record.category.as_str()));
            assert!(PAYMENT_MODES.contains(&record.payment_mode.as_str()));
            assert!(!record.description.is_empty());
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = generate_ledger(&config(99)).unwrap();
        let b = generate_ledger(&config(99)).unwrap();
        assert_eq!(a, b);

        let c = generate_ledger(&config(100)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_month_count_rejected() {
        let bad = GeneratorConfig {
            months: 13,
            ..GeneratorConfig::default()
        };
        assert!(generate_ledger(&bad).is_err());

        let zero = GeneratorConfig {
            months: 0,
            ..GeneratorConfig::default()
        };
        assert!(generate_ledger(&zero).is_err());
    }
}

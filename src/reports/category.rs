//! Category reports
//!
//! Spending rolled up by category: full totals, the top-5 ranking, the
//! high/low priority split, and the single category with the largest share
//! of total spending.

use std::io::Write;

use serde::Serialize;

use super::rollup::{grand_total, sum_by_key};
use super::{escape_csv, Report};
use crate::display::{format_percentage, separator};
use crate::error::{LensError, LensResult};
use crate::models::{ExpenseRecord, Money, Priority};

/// One category with its spending total
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotalRow {
    /// Category label
    pub category: String,
    /// Total amount paid in this category
    pub total: Money,
}

fn category_rows(records: &[ExpenseRecord]) -> Vec<CategoryTotalRow> {
    sum_by_key(records, |r| Some(r.category.clone()), |r| r.amount_paid)
        .into_iter()
        .map(|(category, total)| CategoryTotalRow { category, total })
        .collect()
}

fn format_category_rows(title: &str, rows: &[CategoryTotalRow]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n{}\n", title, separator(48)));

    if rows.is_empty() {
        output.push_str("No matching transactions.\n");
        return output;
    }

    let name_width = rows
        .iter()
        .map(|r| r.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    output.push_str(&format!(
        "{:<name_width$}  {:>12}\n",
        "Category",
        "Total",
        name_width = name_width
    ));
    for row in rows {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}\n",
            row.category,
            row.total.to_string(),
            name_width = name_width
        ));
    }

    output
}

fn export_category_rows<W: Write>(rows: &[CategoryTotalRow], writer: &mut W) -> LensResult<()> {
    writeln!(writer, "Category,Total_Spent").map_err(|e| LensError::Export(e.to_string()))?;
    for row in rows {
        writeln!(
            writer,
            "{},{:.2}",
            escape_csv(&row.category),
            row.total.as_dollars_f64()
        )
        .map_err(|e| LensError::Export(e.to_string()))?;
    }
    Ok(())
}

/// Report 1: total spending in each category, category ascending
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotalsReport {
    pub rows: Vec<CategoryTotalRow>,
}

impl Report for CategoryTotalsReport {
    const TITLE: &'static str = "Total Spending by Category";

    fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            rows: category_rows(records),
        }
    }

    fn format_terminal(&self) -> String {
        format_category_rows(Self::TITLE, &self.rows)
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        export_category_rows(&self.rows, writer)
    }
}

/// Report 4: the five most expensive categories
///
/// Ordered by total descending; categories with equal totals rank
/// alphabetically. Fewer than five categories returns them all.
#[derive(Debug, Clone, Serialize)]
pub struct TopCategoriesReport {
    pub rows: Vec<CategoryTotalRow>,
}

impl Report for TopCategoriesReport {
    const TITLE: &'static str = "Top 5 Most Expensive Categories";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let mut rows = category_rows(records);
        rows.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });
        rows.truncate(5);
        Self { rows }
    }

    fn format_terminal(&self) -> String {
        format_category_rows(Self::TITLE, &self.rows)
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        export_category_rows(&self.rows, writer)
    }
}

/// One priority class with its spending total
#[derive(Debug, Clone, Serialize)]
pub struct PriorityTotalRow {
    /// Priority classification
    pub priority: Priority,
    /// Total amount paid across categories in this class
    pub total: Money,
}

/// Report 14: spending split into high and low priority categories
///
/// High priority covers Bills and Groceries; everything else is low.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityTotalsReport {
    pub rows: Vec<PriorityTotalRow>,
}

impl Report for PriorityTotalsReport {
    const TITLE: &'static str = "High vs. Low Priority Spending";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let rows = sum_by_key(records, |r| Some(r.priority()), |r| r.amount_paid)
            .into_iter()
            .map(|(priority, total)| PriorityTotalRow { priority, total })
            .collect();
        Self { rows }
    }

    fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n{}\n", Self::TITLE, separator(48)));

        if self.rows.is_empty() {
            output.push_str("No matching transactions.\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!(
                "{:<14}  {:>12}\n",
                row.priority.to_string(),
                row.total.to_string()
            ));
        }
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(writer, "Priority,Total_Spent").map_err(|e| LensError::Export(e.to_string()))?;
        for row in &self.rows {
            writeln!(writer, "{},{:.2}", row.priority, row.total.as_dollars_f64())
                .map_err(|e| LensError::Export(e.to_string()))?;
        }
        Ok(())
    }
}

/// The winning category and its share of total spending
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    /// Category label
    pub category: String,
    /// Total amount paid in this category
    pub total: Money,
    /// Share of the grand total, 0-100
    pub percent: f64,
}

/// Report 15: the category contributing the highest percentage of spending
///
/// Returns only the single winner; equal totals break alphabetically. A zero
/// grand total (including the empty ledger) yields no winner and performs no
/// division.
#[derive(Debug, Clone, Serialize)]
pub struct TopCategoryShareReport {
    pub winner: Option<CategoryShare>,
}

impl Report for TopCategoryShareReport {
    const TITLE: &'static str = "Top Category by Share of Spending";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let grand = grand_total(records);
        if grand.is_zero() {
            return Self { winner: None };
        }

        let totals = sum_by_key(records, |r| Some(r.category.clone()), |r| r.amount_paid);

        // Iterating in ascending category order and requiring a strictly
        // greater total makes the alphabetically-first category win ties.
        let mut winner: Option<(String, Money)> = None;
        for (category, total) in totals {
            match &winner {
                Some((_, best)) if total <= *best => {}
                _ => winner = Some((category, total)),
            }
        }

        Self {
            winner: winner.map(|(category, total)| CategoryShare {
                category,
                total,
                percent: total.cents() as f64 * 100.0 / grand.cents() as f64,
            }),
        }
    }

    fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n{}\n", Self::TITLE, separator(48)));

        match &self.winner {
            Some(share) => {
                output.push_str(&format!(
                    "{} accounts for {} of total spending ({})\n",
                    share.category,
                    format_percentage(share.percent),
                    share.total
                ));
            }
            None => output.push_str("No spending recorded.\n"),
        }
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(writer, "Category,Percentage")
            .map_err(|e| LensError::Export(e.to_string()))?;
        if let Some(share) = &self.winner {
            writeln!(writer, "{},{:.2}", escape_csv(&share.category), share.percent)
                .map_err(|e| LensError::Export(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            category,
            "Cash",
            "test",
            Money::from_cents(cents),
            Money::zero(),
        )
    }

    #[test]
    fn test_category_totals_ascending() {
        let records = vec![
            record("Food", 10000),
            record("Bills", 5000),
            record("Food", 5000),
        ];
        let report = CategoryTotalsReport::generate(&records);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category, "Bills");
        assert_eq!(report.rows[0].total.cents(), 5000);
        assert_eq!(report.rows[1].category, "Food");
        assert_eq!(report.rows[1].total.cents(), 15000);
    }

    #[test]
    fn test_category_totals_empty() {
        let report = CategoryTotalsReport::generate(&[]);
        assert!(report.rows.is_empty());
        assert!(report.format_terminal().contains("No matching transactions"));
    }

    #[test]
    fn test_top_categories_limit_and_order() {
        let records: Vec<_> = (1..=7)
            .map(|i| record(&format!("Cat{}", i), i * 1000))
            .collect();
        let report = TopCategoriesReport::generate(&records);

        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.rows[0].category, "Cat7");
        assert_eq!(report.rows[4].category, "Cat3");
        // Non-increasing totals
        for pair in report.rows.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_top_categories_tie_breaks_alphabetically() {
        let records = vec![record("Zeta", 1000), record("Alpha", 1000)];
        let report = TopCategoriesReport::generate(&records);
        assert_eq!(report.rows[0].category, "Alpha");
        assert_eq!(report.rows[1].category, "Zeta");
    }

    #[test]
    fn test_top_categories_fewer_than_five() {
        let records = vec![record("Food", 100), record("Bills", 200)];
        let report = TopCategoriesReport::generate(&records);
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn test_priority_totals() {
        let records = vec![
            record("Bills", 10000),
            record("Groceries", 5000),
            record("Travel", 20000),
        ];
        let report = PriorityTotalsReport::generate(&records);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].priority, Priority::High);
        assert_eq!(report.rows[0].total.cents(), 15000);
        assert_eq!(report.rows[1].priority, Priority::Low);
        assert_eq!(report.rows[1].total.cents(), 20000);
    }

    #[test]
    fn test_top_share_single_category_is_hundred_percent() {
        let records = vec![record("Food", 10000), record("Food", 5000)];
        let report = TopCategoryShareReport::generate(&records);

        let share = report.winner.unwrap();
        assert_eq!(share.category, "Food");
        assert!((share.percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_share_tie_breaks_alphabetically() {
        let records = vec![record("Zeta", 1000), record("Alpha", 1000)];
        let report = TopCategoryShareReport::generate(&records);
        assert_eq!(report.winner.unwrap().category, "Alpha");
    }

    #[test]
    fn test_top_share_zero_grand_total() {
        // Zero-amount records produce a zero grand total; no division happens
        let records = vec![record("Food", 0)];
        let report = TopCategoryShareReport::generate(&records);
        assert!(report.winner.is_none());

        let empty = TopCategoryShareReport::generate(&[]);
        assert!(empty.winner.is_none());
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let records = vec![
            record("Food", 3333),
            record("Bills", 3333),
            record("Travel", 3334),
        ];
        let grand = 10000.0;
        let totals = CategoryTotalsReport::generate(&records);
        let sum: f64 = totals
            .rows
            .iter()
            .map(|r| r.total.cents() as f64 * 100.0 / grand)
            .sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_csv_export() {
        let records = vec![record("Food", 15000)];
        let report = CategoryTotalsReport::generate(&records);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert_eq!(csv, "Category,Total_Spent\nFood,150.00\n");
    }

    #[test]
    fn test_csv_export_quotes_comma_in_category() {
        let records = vec![record("Food, takeout", 15000)];
        let report = CategoryTotalsReport::generate(&records);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert_eq!(csv, "Category,Total_Spent\n\"Food, takeout\",150.00\n");
    }
}

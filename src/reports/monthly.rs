//! Monthly reports
//!
//! Spending bucketed by calendar month: the plain monthly totals, the
//! discretionary subset (Travel/Entertainment/Gifts) by month and category,
//! and the spending trend series rendered as a terminal bar chart.

use std::io::Write;

use serde::Serialize;

use super::rollup::sum_by_key;
use super::Report;
use crate::display::{format_bar, month_label, separator};
use crate::error::{LensError, LensResult};
use crate::models::{ExpenseRecord, Money};

/// Categories treated as discretionary for the monthly subset report
const DISCRETIONARY: [&str; 3] = ["Travel", "Entertainment", "Gifts"];

/// One month with its total
#[derive(Debug, Clone, Serialize)]
pub struct MonthRow {
    /// Calendar month, 1-12
    pub month: u32,
    /// Total for that month
    pub total: Money,
}

pub(super) fn month_rows<VF>(records: &[ExpenseRecord], value: VF) -> Vec<MonthRow>
where
    VF: Fn(&ExpenseRecord) -> Money,
{
    sum_by_key(records, |r| Some(r.month()), value)
        .into_iter()
        .map(|(month, total)| MonthRow { month, total })
        .collect()
}

pub(super) fn format_month_rows(title: &str, rows: &[MonthRow]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n{}\n", title, separator(48)));

    if rows.is_empty() {
        output.push_str("No matching transactions.\n");
        return output;
    }

    for row in rows {
        output.push_str(&format!(
            "{:<4}  {:>12}\n",
            month_label(row.month),
            row.total.to_string()
        ));
    }
    output
}

pub(super) fn export_month_rows<W: Write>(
    rows: &[MonthRow],
    value_header: &str,
    writer: &mut W,
) -> LensResult<()> {
    writeln!(writer, "Month,{}", value_header).map_err(|e| LensError::Export(e.to_string()))?;
    for row in rows {
        writeln!(writer, "{},{:.2}", row.month, row.total.as_dollars_f64())
            .map_err(|e| LensError::Export(e.to_string()))?;
    }
    Ok(())
}

/// Report 7: total spending in each month present in the ledger
///
/// Only months with at least one record appear; an eight-month ledger yields
/// eight rows, never twelve.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTotalsReport {
    pub rows: Vec<MonthRow>,
}

impl Report for MonthlyTotalsReport {
    const TITLE: &'static str = "Total Spending per Month";

    fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            rows: month_rows(records, |r| r.amount_paid),
        }
    }

    fn format_terminal(&self) -> String {
        format_month_rows(Self::TITLE, &self.rows)
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        export_month_rows(&self.rows, "Total_Spent", writer)
    }
}

/// One (month, category) bucket of discretionary spending
#[derive(Debug, Clone, Serialize)]
pub struct MonthCategoryRow {
    /// Calendar month, 1-12
    pub month: u32,
    /// Category label
    pub category: String,
    /// Total for that month and category
    pub total: Money,
}

/// Report 8: monthly spending in Travel, Entertainment, and Gifts
///
/// Ordered by total descending so the heaviest months lead; equal totals
/// fall back to month then category order for determinism.
#[derive(Debug, Clone, Serialize)]
pub struct DiscretionaryMonthlyReport {
    pub rows: Vec<MonthCategoryRow>,
}

impl Report for DiscretionaryMonthlyReport {
    const TITLE: &'static str = "Monthly Spending: Travel, Entertainment, Gifts";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let buckets = sum_by_key(
            records,
            |r| {
                DISCRETIONARY
                    .contains(&r.category.as_str())
                    .then(|| (r.month(), r.category.clone()))
            },
            |r| r.amount_paid,
        );

        let mut rows: Vec<MonthCategoryRow> = buckets
            .into_iter()
            .map(|((month, category), total)| MonthCategoryRow {
                month,
                category,
                total,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.month.cmp(&b.month))
                .then_with(|| a.category.cmp(&b.category))
        });
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
                "{:<4}  {:<14}  {:>12}\n",
                month_label(row.month),
                row.category,
                row.total.to_string()
            ));
        }
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(writer, "Month,Category,Total_Spent")
            .map_err(|e| LensError::Export(e.to_string()))?;
        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2}",
                row.month,
                row.category,
                row.total.as_dollars_f64()
            )
            .map_err(|e| LensError::Export(e.to_string()))?;
        }
        Ok(())
    }
}

/// Report 11: overall spending trend over time
///
/// The same computation as the monthly totals, exposed as its own payload
/// for visualization consumers and rendered as a bar chart in the terminal.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingTrendReport {
    pub rows: Vec<MonthRow>,
}

impl Report for SpendingTrendReport {
    const TITLE: &'static str = "Spending Trend Over Time";

    fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            rows: month_rows(records, |r| r.amount_paid),
        }
    }

    fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n{}\n", Self::TITLE, separator(48)));

        if self.rows.is_empty() {
            output.push_str("No matching transactions.\n");
            return output;
        }

        let max = self
            .rows
            .iter()
            .map(|r| r.total.cents())
            .max()
            .unwrap_or(0) as f64;

        for row in &self.rows {
            output.push_str(&format!(
                "{:<4}  {}  {:>12}\n",
                month_label(row.month),
                format_bar(row.total.cents() as f64, max, 30),
                row.total.to_string()
            ));
        }
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        export_month_rows(&self.rows, "Total_Spent", writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(month: u32, category: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, month, 15).unwrap(),
            category,
            "Cash",
            "test",
            Money::from_cents(cents),
            Money::zero(),
        )
    }

    #[test]
    fn test_monthly_totals_only_present_months() {
        let records = vec![
            record(3, "Food", 1000),
            record(1, "Food", 2000),
            record(3, "Bills", 500),
        ];
        let report = MonthlyTotalsReport::generate(&records);

        let months: Vec<u32> = report.rows.iter().map(|r| r.month).collect();
        assert_eq!(months, vec![1, 3]);
        assert_eq!(report.rows[1].total.cents(), 1500);
    }

    #[test]
    fn test_monthly_totals_empty() {
        let report = MonthlyTotalsReport::generate(&[]);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_discretionary_filter_and_order() {
        let records = vec![
            record(1, "Travel", 30000),
            record(2, "Entertainment", 10000),
            record(2, "Gifts", 5000),
            record(1, "Bills", 99999),
        ];
        let report = DiscretionaryMonthlyReport::generate(&records);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].category, "Travel");
        assert_eq!(report.rows[0].total.cents(), 30000);
        assert_eq!(report.rows[2].category, "Gifts");
    }

    #[test]
    fn test_discretionary_tie_order_is_deterministic() {
        let records = vec![
            record(5, "Gifts", 1000),
            record(2, "Travel", 1000),
            record(2, "Entertainment", 1000),
        ];
        let report = DiscretionaryMonthlyReport::generate(&records);

        assert_eq!(report.rows[0].month, 2);
        assert_eq!(report.rows[0].category, "Entertainment");
        assert_eq!(report.rows[1].category, "Travel");
        assert_eq!(report.rows[2].month, 5);
    }

    #[test]
    fn test_trend_matches_monthly_totals() {
        let records = vec![record(1, "Food", 1000), record(4, "Bills", 7000)];
        let totals = MonthlyTotalsReport::generate(&records);
        let trend = SpendingTrendReport::generate(&records);

        assert_eq!(totals.rows.len(), trend.rows.len());
        for (a, b) in totals.rows.iter().zip(trend.rows.iter()) {
            assert_eq!(a.month, b.month);
            assert_eq!(a.total, b.total);
        }
    }

    #[test]
    fn test_trend_chart_contains_bars() {
        let records = vec![record(1, "Food", 1000)];
        let report = SpendingTrendReport::generate(&records);
        assert!(report.format_terminal().contains('█'));
    }
}

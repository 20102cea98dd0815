//! Pattern reports
//!
//! Recurrence and habit analysis: descriptions that repeat across the
//! ledger, typical travel costs per description, and grocery spending by
//! weekday.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use super::rollup::{sum_and_count_by_key, sum_by_key};
use super::{escape_csv, Report};
use crate::display::{separator, weekday_label};
use crate::error::{LensError, LensResult};
use crate::models::{ExpenseRecord, Money};

/// One recurring expense: a description seen more than once
#[derive(Debug, Clone, Serialize)]
pub struct RecurringRow {
    /// Description shared by the occurrences
    pub description: String,
    /// Number of occurrences
    pub occurrences: usize,
    /// Distinct months, in order of first occurrence in the ledger
    pub months: Vec<u32>,
}

/// Report 9: expenses whose description occurs more than once
///
/// Rows are ordered by description ascending; one-off descriptions are
/// excluded.
#[derive(Debug, Clone, Serialize)]
pub struct RecurringExpensesReport {
    pub rows: Vec<RecurringRow>,
}

impl Report for RecurringExpensesReport {
    const TITLE: &'static str = "Recurring Expenses";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let mut groups: BTreeMap<String, (usize, Vec<u32>)> = BTreeMap::new();
        for record in records {
            let entry = groups
                .entry(record.description.clone())
                .or_insert((0, Vec::new()));
            entry.0 += 1;
            let month = record.month();
            if !entry.1.contains(&month) {
                entry.1.push(month);
            }
        }

        let rows = groups
            .into_iter()
            .filter(|(_, (count, _))| *count > 1)
            .map(|(description, (occurrences, months))| RecurringRow {
                description,
                occurrences,
                months,
            })
            .collect();
        Self { rows }
    }

    fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n{}\n", Self::TITLE, separator(60)));

        if self.rows.is_empty() {
            output.push_str("No recurring expenses found.\n");
            return output;
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.description.len())
            .max()
            .unwrap_or(11)
            .max(11);

        output.push_str(&format!(
            "{:<name_width$}  {:>6}  Months\n",
            "Description",
            "Count",
            name_width = name_width
        ));
        for row in &self.rows {
            let months: Vec<String> = row.months.iter().map(|m| m.to_string()).collect();
            output.push_str(&format!(
                "{:<name_width$}  {:>6}  {}\n",
                row.description,
                row.occurrences,
                months.join(", "),
                name_width = name_width
            ));
        }
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(writer, "Description,Occurrences,Months")
            .map_err(|e| LensError::Export(e.to_string()))?;
        for row in &self.rows {
            let months: Vec<String> = row.months.iter().map(|m| m.to_string()).collect();
            // Months are joined without a comma so the CSV stays three columns
            writeln!(
                writer,
                "{},{},{}",
                escape_csv(&row.description),
                row.occurrences,
                months.join(";")
            )
            .map_err(|e| LensError::Export(e.to_string()))?;
        }
        Ok(())
    }
}

/// One travel description with its typical cost
#[derive(Debug, Clone, Serialize)]
pub struct TravelCostRow {
    /// Trip description
    pub description: String,
    /// Average amount paid across occurrences, rounded to the cent
    pub average: Money,
    /// Number of occurrences
    pub trips: usize,
}

/// Report 12: typical costs of Travel expenses, grouped by description
///
/// Ordered by average cost descending; equal averages fall back to
/// description order.
#[derive(Debug, Clone, Serialize)]
pub struct TravelCostReport {
    pub rows: Vec<TravelCostRow>,
}

impl Report for TravelCostReport {
    const TITLE: &'static str = "Typical Travel Costs";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let groups = sum_and_count_by_key(records, |r| {
            (r.category == "Travel").then(|| r.description.clone())
        });

        let mut buckets: Vec<(String, Money, usize)> = groups
            .into_iter()
            .map(|(description, (total, count))| (description, total, count))
            .collect();

        // Compare exact averages by cross-multiplying the totals so rounding
        // never reorders the ranking.
        buckets.sort_by(|a, b| {
            let lhs = b.1.cents() as i128 * a.2 as i128;
            let rhs = a.1.cents() as i128 * b.2 as i128;
            lhs.cmp(&rhs).then_with(|| a.0.cmp(&b.0))
        });

        let rows = buckets
            .into_iter()
            .map(|(description, total, count)| TravelCostRow {
                description,
                average: Money::from_cents(
                    (total.cents() as f64 / count as f64).round() as i64
                ),
                trips: count,
            })
            .collect();
        Self { rows }
    }

    fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n{}\n", Self::TITLE, separator(60)));

        if self.rows.is_empty() {
            output.push_str("No travel expenses found.\n");
            return output;
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.description.len())
            .max()
            .unwrap_or(11)
            .max(11);

        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>6}\n",
            "Description",
            "Avg Cost",
            "Trips",
            name_width = name_width
        ));
        for row in &self.rows {
            output.push_str(&format!(
                "{:<name_width$}  {:>12}  {:>6}\n",
                row.description,
                row.average.to_string(),
                row.trips,
                name_width = name_width
            ));
        }
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(writer, "Description,Avg_Cost,Frequency")
            .map_err(|e| LensError::Export(e.to_string()))?;
        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{}",
                escape_csv(&row.description),
                row.average.as_dollars_f64(),
                row.trips
            )
            .map_err(|e| LensError::Export(e.to_string()))?;
        }
        Ok(())
    }
}

/// One weekday with its grocery spending total
#[derive(Debug, Clone, Serialize)]
pub struct WeekdayRow {
    /// Weekday index, 0=Sunday through 6=Saturday
    pub weekday: u32,
    /// Grocery spending on that weekday
    pub total: Money,
}

/// Report 13: grocery spending bucketed by weekday
///
/// Weekday numbering follows SQLite's `strftime('%w')`: 0=Sunday through
/// 6=Saturday. Only weekdays with grocery spending appear.
#[derive(Debug, Clone, Serialize)]
pub struct WeekdayGroceryReport {
    pub rows: Vec<WeekdayRow>,
}

impl Report for WeekdayGroceryReport {
    const TITLE: &'static str = "Grocery Spending by Weekday";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let rows = sum_by_key(
            records,
            |r| (r.category == "Groceries").then(|| r.weekday_index()),
            |r| r.amount_paid,
        )
        .into_iter()
        .map(|(weekday, total)| WeekdayRow { weekday, total })
        .collect();
        Self { rows }
    }

    fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n{}\n", Self::TITLE, separator(48)));

        if self.rows.is_empty() {
            output.push_str("No grocery expenses found.\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10}  {:>12}\n",
                weekday_label(row.weekday),
                row.total.to_string()
            ));
        }
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(writer, "Weekday,Total_Spent").map_err(|e| LensError::Export(e.to_string()))?;
        for row in &self.rows {
            writeln!(writer, "{},{:.2}", row.weekday, row.total.as_dollars_f64())
                .map_err(|e| LensError::Export(e.to_string()))?;
        }
        Ok(())
    }
}

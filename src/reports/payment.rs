//! Payment mode reports
//!
//! Spending rolled up by payment mode, for the whole ledger and for the
//! Transportation category on its own.

use std::io::Write;

use serde::Serialize;

use super::rollup::sum_by_key;
use super::{escape_csv, Report};
use crate::display::separator;
use crate::error::{LensError, LensResult};
use crate::models::{ExpenseRecord, Money};

/// One payment mode with its spending total
#[derive(Debug, Clone, Serialize)]
pub struct PaymentModeRow {
    /// Payment mode label
    pub payment_mode: String,
    /// Total amount paid through this mode
    pub total: Money,
}

fn mode_rows<F>(records: &[ExpenseRecord], mut filter: F) -> Vec<PaymentModeRow>
where
    F: FnMut(&ExpenseRecord) -> bool,
{
    sum_by_key(
        records,
        |r| filter(r).then(|| r.payment_mode.clone()),
        |r| r.amount_paid,
    )
    .into_iter()
    .map(|(payment_mode, total)| PaymentModeRow {
        payment_mode,
        total,
    })
    .collect()
}

fn format_mode_rows(title: &str, rows: &[PaymentModeRow]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n{}\n", title, separator(48)));

    if rows.is_empty() {
        output.push_str("No matching transactions.\n");
        return output;
    }

    for row in rows {
        output.push_str(&format!(
            "{:<12}  {:>12}\n",
            row.payment_mode,
            row.total.to_string()
        ));
    }
    output
}

fn export_mode_rows<W: Write>(rows: &[PaymentModeRow], writer: &mut W) -> LensResult<()> {
    writeln!(writer, "Payment_Mode,Total_Spent").map_err(|e| LensError::Export(e.to_string()))?;
    for row in rows {
        writeln!(
            writer,
            "{},{:.2}",
            escape_csv(&row.payment_mode),
            row.total.as_dollars_f64()
        )
        .map_err(|e| LensError::Export(e.to_string()))?;
    }
    Ok(())
}

/// Report 2: total spending through each payment mode, mode ascending
#[derive(Debug, Clone, Serialize)]
pub struct PaymentModeTotalsReport {
    pub rows: Vec<PaymentModeRow>,
}

impl Report for PaymentModeTotalsReport {
    const TITLE: &'static str = "Total Spending by Payment Mode";

    fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            rows: mode_rows(records, |_| true),
        }
    }

    fn format_terminal(&self) -> String {
        format_mode_rows(Self::TITLE, &self.rows)
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        export_mode_rows(&self.rows, writer)
    }
}

/// Report 5: Transportation spending split by payment mode
#[derive(Debug, Clone, Serialize)]
pub struct TransportationByModeReport {
    pub rows: Vec<PaymentModeRow>,
}

impl Report for TransportationByModeReport {
    const TITLE: &'static str = "Transportation Spending by Payment Mode";

    fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            rows: mode_rows(records, |r| r.category == "Transportation"),
        }
    }

    fn format_terminal(&self) -> String {
        format_mode_rows(Self::TITLE, &self.rows)
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        export_mode_rows(&self.rows, writer)
    }
}

//! Cashback reports
//!
//! Rewards earned across the ledger: the overall scalar, the full list of
//! transactions that earned cashback, and the month-by-month series.

use std::io::Write;

use serde::Serialize;

use super::monthly::{export_month_rows, format_month_rows, month_rows, MonthRow};
use super::{escape_csv, Report};
use crate::display::{format_record_table, separator};
use crate::error::{LensError, LensResult};
use crate::models::{ExpenseRecord, Money};

/// Report 3: total cashback received across all transactions
#[derive(Debug, Clone, Serialize)]
pub struct TotalCashbackReport {
    pub total: Money,
}

impl Report for TotalCashbackReport {
    const TITLE: &'static str = "Total Cashback Received";

    fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            total: records.iter().map(|r| r.cashback).sum(),
        }
    }

    fn format_terminal(&self) -> String {
        format!("{}\n{}\n{}\n", Self::TITLE, separator(48), self.total)
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(writer, "Total_Cashback").map_err(|e| LensError::Export(e.to_string()))?;
        writeln!(writer, "{:.2}", self.total.as_dollars_f64())
            .map_err(|e| LensError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Report 6: every transaction that earned cashback
///
/// Ordered by date ascending; records on the same date keep their original
/// ledger order (the sort is stable).
#[derive(Debug, Clone, Serialize)]
pub struct CashbackTransactionsReport {
    pub records: Vec<ExpenseRecord>,
}

impl Report for CashbackTransactionsReport {
    const TITLE: &'static str = "Transactions with Cashback";

    fn generate(records: &[ExpenseRecord]) -> Self {
        let mut matching: Vec<ExpenseRecord> = records
            .iter()
            .filter(|r| r.has_cashback())
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.date);
        Self { records: matching }
    }

    fn format_terminal(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            Self::TITLE,
            separator(48),
            format_record_table(&self.records)
        )
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        writeln!(
            writer,
            "Date,Category,Payment_Mode,Description,Amount_Paid,Cashback"
        )
        .map_err(|e| LensError::Export(e.to_string()))?;
        for r in &self.records {
            writeln!(
                writer,
                "{},{},{},{},{:.2},{:.2}",
                r.date.format("%Y-%m-%d"),
                escape_csv(&r.category),
                escape_csv(&r.payment_mode),
                escape_csv(&r.description),
                r.amount_paid.as_dollars_f64(),
                r.cashback.as_dollars_f64()
            )
            .map_err(|e| LensError::Export(e.to_string()))?;
        }
        Ok(())
    }
}

/// Report 10: cashback earned in each month present in the ledger
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyCashbackReport {
    pub rows: Vec<MonthRow>,
}

impl Report for MonthlyCashbackReport {
    const TITLE: &'static str = "Monthly Cashback Earned";

    fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            rows: month_rows(records, |r| r.cashback),
        }
    }

    fn format_terminal(&self) -> String {
        format_month_rows(Self::TITLE, &self.rows)
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()> {
        export_month_rows(&self.rows, "Total_Cashback", writer)
    }
}

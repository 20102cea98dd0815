//! CSV ledger ingestion and writing
//!
//! Reads expense ledgers in the dashboard CSV shape:
//! `Date,Category,Payment_Mode,Description,Amount_Paid,Cashback`. All
//! validation happens here, at the ingestion boundary: malformed dates,
//! missing fields, negative or unparsable amounts, and cashback exceeding
//! the amount paid are rejected row by row. The reports downstream assume
//! validated records and never re-check.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, StringRecord};

use crate::error::{LensError, LensResult};
use crate::models::{ExpenseRecord, Money};

/// Column positions resolved from the CSV header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    date: usize,
    category: usize,
    payment_mode: usize,
    description: usize,
    amount_paid: usize,
    cashback: usize,
}

impl ColumnIndexes {
    /// Locate the expected columns by header name, case-insensitively
    fn from_headers(headers: &StringRecord) -> Result<Self, String> {
        let find = |name: &str| -> Result<usize, String> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| format!("missing column '{}'", name))
        };

        Ok(Self {
            date: find("Date")?,
            category: find("Category")?,
            payment_mode: find("Payment_Mode")?,
            description: find("Description")?,
            amount_paid: find("Amount_Paid")?,
            cashback: find("Cashback")?,
        })
    }
}

/// A row that failed ingestion
#[derive(Debug, Clone)]
pub struct RowError {
    /// 1-based data row number (excluding the header)
    pub row: usize,
    /// What went wrong
    pub message: String,
}

/// Outcome of reading a ledger: parsed records plus per-row failures
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Successfully parsed records, in ledger order
    pub records: Vec<ExpenseRecord>,
    /// Rows rejected at the ingestion boundary
    pub errors: Vec<RowError>,
}

/// Read a ledger from any reader, collecting per-row errors
pub fn read_ledger<R: Read>(reader: R) -> LensResult<LoadOutcome> {
    let mut csv_reader = Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let columns =
        ColumnIndexes::from_headers(&headers).map_err(LensError::Ingest)?;

    let mut outcome = LoadOutcome::default();
    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                outcome.errors.push(RowError {
                    row,
                    message: format!("unreadable row: {}", e),
                });
                continue;
            }
        };

        match parse_record(&record, columns) {
            Ok(expense) => outcome.records.push(expense),
            Err(message) => outcome.errors.push(RowError { row, message }),
        }
    }

    Ok(outcome)
}

/// Load a ledger file strictly: any bad row fails the load
pub fn load_ledger(path: &Path) -> LensResult<Vec<ExpenseRecord>> {
    let file = File::open(path)
        .map_err(|e| LensError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let outcome = read_ledger(file)?;

    if let Some(first) = outcome.errors.first() {
        return Err(LensError::bad_row(
            first.row,
            format!(
                "{} ({} bad row(s) total)",
                first.message,
                outcome.errors.len()
            ),
        ));
    }

    Ok(outcome.records)
}

/// Parse a single CSV record into an expense record
fn parse_record(record: &StringRecord, columns: ColumnIndexes) -> Result<ExpenseRecord, String> {
    let field = |idx: usize, name: &str| -> Result<&str, String> {
        let value = record
            .get(idx)
            .map(str::trim)
            .ok_or_else(|| format!("missing {}", name))?;
        if value.is_empty() {
            return Err(format!("missing {}", name));
        }
        Ok(value)
    };

    let date_str = field(columns.date, "Date")?;
    let date = parse_date(date_str)?;

    let category = field(columns.category, "Category")?.to_string();
    let payment_mode = field(columns.payment_mode, "Payment_Mode")?.to_string();
    let description = field(columns.description, "Description")?.to_string();

    let amount_paid = Money::parse(field(columns.amount_paid, "Amount_Paid")?)
        .map_err(|e| format!("Amount_Paid: {}", e))?;

    // An absent cashback field means none was earned
    let cashback = match record.get(columns.cashback).map(str::trim) {
        None | Some("") => Money::zero(),
        Some(value) => Money::parse(value).map_err(|e| format!("Cashback: {}", e))?,
    };

    if cashback > amount_paid {
        return Err(format!(
            "cashback {} exceeds amount paid {}",
            cashback, amount_paid
        ));
    }

    Ok(ExpenseRecord::new(
        date,
        category,
        payment_mode,
        description,
        amount_paid,
        cashback,
    ))
}

/// Parse a date string, trying the canonical format then common fallbacks
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let formats = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }
    Err(format!("could not parse date '{}'", s))
}

/// Write records as a ledger CSV in the canonical column order
pub fn write_ledger<W: Write>(writer: W, records: &[ExpenseRecord]) -> LensResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Date",
        "Category",
        "Payment_Mode",
        "Description",
        "Amount_Paid",
        "Cashback",
    ])?;

    for r in records {
        csv_writer.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.category.clone(),
            r.payment_mode.clone(),
            r.description.clone(),
            format!("{:.2}", r.amount_paid.as_dollars_f64()),
            format!("{:.2}", r.cashback.as_dollars_f64()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

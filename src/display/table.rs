//! Record table rendering
//!
//! Formats expense record lists for terminal output using `tabled`.

use tabled::{settings::Style, Table, Tabled};

use crate::models::ExpenseRecord;

/// One expense record prepared for table display
#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Mode")]
    payment_mode: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount_paid: String,
    #[tabled(rename = "Cashback")]
    cashback: String,
}

impl From<&ExpenseRecord> for RecordRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            category: record.category.clone(),
            payment_mode: record.payment_mode.clone(),
            description: record.description.clone(),
            amount_paid: record.amount_paid.to_string(),
            cashback: record.cashback.to_string(),
        }
    }
}

/// Format a list of expense records as a table
pub fn format_record_table(records: &[ExpenseRecord]) -> String {
    if records.is_empty() {
        return "No matching transactions.".to_string();
    }

    let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_record_table(&[]), "No matching transactions.");
    }

    #[test]
    fn test_table_contains_record_fields() {
        let records = vec![ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Food",
            "Cash",
            "Lunch downtown",
            Money::from_cents(12345),
            Money::from_cents(250),
        )];

        let table = format_record_table(&records);
        assert!(table.contains("2024-01-05"));
        assert!(table.contains("Food"));
        assert!(table.contains("Lunch downtown"));
        assert!(table.contains("$123.45"));
        assert!(table.contains("$2.50"));
    }
}

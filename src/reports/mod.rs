//! Reports module for SpendLens
//!
//! The aggregation engine: fifteen named report operations, each a pure
//! function of the in-memory record collection. Every report implements
//! [`Report`], so generation, terminal rendering, CSV export, and JSON
//! output share one surface. Reports never fail on degenerate input; an
//! empty ledger yields empty rows or zero totals.

pub mod cashback;
pub mod category;
pub mod monthly;
pub mod patterns;
pub mod payment;
pub(crate) mod rollup;

use std::io::Write;

use serde::Serialize;

use crate::error::LensResult;
use crate::models::ExpenseRecord;

pub use cashback::{CashbackTransactionsReport, MonthlyCashbackReport, TotalCashbackReport};
pub use category::{
    CategoryTotalsReport, PriorityTotalsReport, TopCategoriesReport, TopCategoryShareReport,
};
pub use monthly::{DiscretionaryMonthlyReport, MonthlyTotalsReport, SpendingTrendReport};
pub use patterns::{RecurringExpensesReport, TravelCostReport, WeekdayGroceryReport};
pub use payment::{PaymentModeTotalsReport, TransportationByModeReport};

/// A report computed over the full record collection
///
/// Implementations must be pure: no side effects, no mutation of the input,
/// identical output for identical input.
pub trait Report: Serialize + Sized {
    /// Human-readable report title
    const TITLE: &'static str;

    /// Compute the report payload from the record collection
    fn generate(records: &[ExpenseRecord]) -> Self;

    /// Format the report for terminal display
    fn format_terminal(&self) -> String;

    /// Export the report rows as CSV
    fn export_csv<W: Write>(&self, writer: &mut W) -> LensResult<()>;
}

/// Escape a string for CSV format
///
/// Free-text fields (descriptions, categories, payment modes) pass through
/// ingestion unrestricted, so exports must quote them.
pub(crate) fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

//! Display formatting for terminal output
//!
//! Provides utilities for formatting report payloads and record lists for
//! terminal display.

pub mod report;
pub mod table;

pub use report::{format_bar, format_percentage, month_label, separator, weekday_label};
pub use table::format_record_table;

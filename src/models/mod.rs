//! Core data models for SpendLens
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record itself, the money type, and the derived
//! priority classification.

pub mod money;
pub mod priority;
pub mod record;

pub use money::{Money, MoneyParseError};
pub use priority::Priority;
pub use record::ExpenseRecord;

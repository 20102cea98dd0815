//! Record sources for SpendLens
//!
//! Everything that produces the in-memory record collection the reports
//! consume: CSV ledger ingestion (with row-level validation) and the
//! synthetic demo generator. Validation lives here so the reports can assume
//! clean input.

pub mod csv;
pub mod generate;

pub use self::csv::{load_ledger, read_ledger, write_ledger, LoadOutcome, RowError};
pub use self::generate::{generate_ledger, GeneratorConfig, CATEGORIES, PAYMENT_MODES};

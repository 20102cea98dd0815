//! SpendLens - Command-line expense ledger analysis
//!
//! This library provides the core functionality for the SpendLens CLI. It
//! ingests a ledger of expense records (or synthesizes one) and computes a
//! fixed set of fifteen analytical reports over the in-memory collection.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the default ledger location
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, money, priority)
//! - `source`: Record sources (CSV ingestion, synthetic generation)
//! - `reports`: The aggregation engine - fifteen pure report operations
//! - `display`: Terminal formatting helpers
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use spendlens::reports::{CategoryTotalsReport, Report};
//!
//! let records = vec![];
//! let report = CategoryTotalsReport::generate(&records);
//! assert!(report.rows.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod source;

pub use error::{LensError, LensResult};

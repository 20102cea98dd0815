//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report engine.

pub mod data;
pub mod report;

pub use data::{handle_generate_command, GenerateArgs};
pub use report::{handle_report_command, ReportArgs, ReportKind};

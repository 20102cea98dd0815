//! Path management for SpendLens
//!
//! Resolves where the default ledger lives when the CLI is invoked without
//! `--file`.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDLENS_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories`
//!    (e.g. `~/.config/spendlens` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{LensError, LensResult};

/// Name of the ledger file inside the data directory
const LEDGER_FILE: &str = "ledger.csv";

/// Manages all paths used by SpendLens
#[derive(Debug, Clone)]
pub struct LensPaths {
    /// Base directory for all SpendLens data
    base_dir: PathBuf,
}

impl LensPaths {
    /// Create a new LensPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// environment override is unset.
    pub fn new() -> LensResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDLENS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "spendlens")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    LensError::Config("could not determine a home directory".to_string())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create LensPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path of the default ledger file
    pub fn default_ledger(&self) -> PathBuf {
        self.base_dir.join(LEDGER_FILE)
    }

    /// Create the base directory if it does not exist
    pub fn ensure_exists(&self) -> LensResult<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}

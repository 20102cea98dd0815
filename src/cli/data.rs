//! CLI command for synthetic ledger generation

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::LensPaths;
use crate::error::{LensError, LensResult};
use crate::source::{generate_ledger, write_ledger, GeneratorConfig};

/// Arguments for the `generate` command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Where to write the ledger CSV (defaults to the configured data directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Year the ledger covers
    #[arg(long, default_value_t = 2024)]
    pub year: i32,

    /// Number of months to generate, starting from January
    #[arg(long, default_value_t = 12)]
    pub months: u32,

    /// Records per month
    #[arg(long, default_value_t = 100)]
    pub per_month: usize,

    /// RNG seed for reproducible ledgers
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Handle the `generate` command
pub fn handle_generate_command(args: GenerateArgs) -> LensResult<()> {
    let config = GeneratorConfig {
        year: args.year,
        months: args.months,
        per_month: args.per_month,
        seed: args.seed,
    };
    let records = generate_ledger(&config)?;

    let path = match args.output {
        Some(path) => path,
        None => {
            let paths = LensPaths::new()?;
            paths.ensure_exists()?;
            paths.default_ledger()
        }
    };

    let file = File::create(&path).map_err(|e| {
        LensError::Io(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    write_ledger(BufWriter::new(file), &records)?;

    println!(
        "Wrote {} records ({} month(s) of {}) to {}",
        records.len(),
        config.months,
        config.year,
        path.display()
    );
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlens::cli::{handle_generate_command, handle_report_command, GenerateArgs, ReportArgs};
use spendlens::config::LensPaths;

#[derive(Parser)]
#[command(
    name = "spendlens",
    author = "Kaylee Beyene",
    version,
    about = "Command-line expense ledger analysis",
    long_about = "SpendLens analyzes a ledger of personal expense records. It \
                  computes category, payment-mode, monthly, and pattern reports \
                  over a CSV ledger, and can generate synthetic ledgers for demos."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a report against a ledger
    #[command(alias = "r")]
    Report(ReportArgs),

    /// Generate a synthetic ledger CSV
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(args)?;
        }
        Some(Commands::Generate(args)) => {
            handle_generate_command(args)?;
        }
        Some(Commands::Config) => {
            let paths = LensPaths::new()?;
            println!("SpendLens Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Default ledger: {}", paths.default_ledger().display());
        }
        None => {
            println!("SpendLens - expense ledger analysis");
            println!();
            println!("Run 'spendlens --help' for usage information.");
            println!("Run 'spendlens generate' to create a demo ledger, then");
            println!("'spendlens report all' to see every report.");
        }
    }

    Ok(())
}

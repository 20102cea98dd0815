//! CLI command for reports
//!
//! Bridges the clap arguments to the aggregation engine: resolves the ledger
//! path, loads the records once, and runs the requested report (or all of
//! them) against the in-memory snapshot.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::LensPaths;
use crate::error::{LensError, LensResult};
use crate::models::ExpenseRecord;
use crate::reports::{
    CashbackTransactionsReport, CategoryTotalsReport, DiscretionaryMonthlyReport,
    MonthlyCashbackReport, MonthlyTotalsReport, PaymentModeTotalsReport, PriorityTotalsReport,
    RecurringExpensesReport, Report, SpendingTrendReport, TopCategoriesReport,
    TopCategoryShareReport, TotalCashbackReport, TransportationByModeReport, TravelCostReport,
    WeekdayGroceryReport,
};
use crate::source::load_ledger;

/// The fifteen report operations, plus `all`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Total spending in each category
    CategoryTotals,
    /// Total spending through each payment mode
    PaymentModeTotals,
    /// Total cashback received
    TotalCashback,
    /// The five most expensive categories
    TopCategories,
    /// Transportation spending by payment mode
    TransportationByMode,
    /// Transactions that earned cashback
    CashbackTransactions,
    /// Total spending per month
    MonthlyTotals,
    /// Monthly Travel/Entertainment/Gifts spending
    DiscretionaryMonthly,
    /// Expenses whose description repeats
    RecurringExpenses,
    /// Cashback earned per month
    MonthlyCashback,
    /// Spending trend over time
    SpendingTrend,
    /// Typical travel costs by description
    TravelCosts,
    /// Grocery spending by weekday
    WeekdayGroceries,
    /// High vs. low priority spending
    PriorityTotals,
    /// Top category by share of spending
    TopCategoryShare,
    /// Run every report in order
    All,
}

/// Arguments for the `report` command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Which report to run
    #[arg(value_enum)]
    pub kind: ReportKind,

    /// Ledger CSV to analyze (defaults to the configured data directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Export the report to a CSV file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report payload as JSON
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

/// Handle the `report` command
pub fn handle_report_command(args: ReportArgs) -> LensResult<()> {
    let ledger_path = resolve_ledger_path(args.file)?;
    let records = load_ledger(&ledger_path)?;

    match args.kind {
        ReportKind::All => {
            if args.output.is_some() || args.json {
                return Err(LensError::Validation(
                    "'all' prints to the terminal; run a single report for --output or --json"
                        .to_string(),
                ));
            }
            run_all(&records);
            Ok(())
        }
        kind => run_one(kind, &records, args.output.as_deref(), args.json),
    }
}

/// Resolve the ledger path: explicit flag, or the configured default
fn resolve_ledger_path(file: Option<PathBuf>) -> LensResult<PathBuf> {
    if let Some(path) = file {
        return Ok(path);
    }

    let paths = LensPaths::new()?;
    let ledger = paths.default_ledger();
    if !ledger.exists() {
        return Err(LensError::Config(format!(
            "no ledger at {}; pass --file or run 'spendlens generate' first",
            ledger.display()
        )));
    }
    Ok(ledger)
}

fn run_one(
    kind: ReportKind,
    records: &[ExpenseRecord],
    output: Option<&Path>,
    json: bool,
) -> LensResult<()> {
    match kind {
        ReportKind::CategoryTotals => emit::<CategoryTotalsReport>(records, output, json),
        ReportKind::PaymentModeTotals => emit::<PaymentModeTotalsReport>(records, output, json),
        ReportKind::TotalCashback => emit::<TotalCashbackReport>(records, output, json),
        ReportKind::TopCategories => emit::<TopCategoriesReport>(records, output, json),
        ReportKind::TransportationByMode => {
            emit::<TransportationByModeReport>(records, output, json)
        }
        ReportKind::CashbackTransactions => {
            emit::<CashbackTransactionsReport>(records, output, json)
        }
        ReportKind::MonthlyTotals => emit::<MonthlyTotalsReport>(records, output, json),
        ReportKind::DiscretionaryMonthly => {
            emit::<DiscretionaryMonthlyReport>(records, output, json)
        }
        ReportKind::RecurringExpenses => emit::<RecurringExpensesReport>(records, output, json),
        ReportKind::MonthlyCashback => emit::<MonthlyCashbackReport>(records, output, json),
        ReportKind::SpendingTrend => emit::<SpendingTrendReport>(records, output, json),
        ReportKind::TravelCosts => emit::<TravelCostReport>(records, output, json),
        ReportKind::WeekdayGroceries => emit::<WeekdayGroceryReport>(records, output, json),
        ReportKind::PriorityTotals => emit::<PriorityTotalsReport>(records, output, json),
        ReportKind::TopCategoryShare => emit::<TopCategoryShareReport>(records, output, json),
        ReportKind::All => unreachable!("handled by the caller"),
    }
}

/// Generate one report and send it to the requested destination
fn emit<R: Report>(records: &[ExpenseRecord], output: Option<&Path>, json: bool) -> LensResult<()> {
    let report = R::generate(records);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(path) = output {
        let file = File::create(path).map_err(|e| {
            LensError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn run_all(records: &[ExpenseRecord]) {
    println!("{}", CategoryTotalsReport::generate(records).format_terminal());
    println!("{}", PaymentModeTotalsReport::generate(records).format_terminal());
    println!("{}", TotalCashbackReport::generate(records).format_terminal());
    println!("{}", TopCategoriesReport::generate(records).format_terminal());
    println!("{}", TransportationByModeReport::generate(records).format_terminal());
    println!("{}", CashbackTransactionsReport::generate(records).format_terminal());
    println!("{}", MonthlyTotalsReport::generate(records).format_terminal());
    println!("{}", DiscretionaryMonthlyReport::generate(records).format_terminal());
    println!("{}", RecurringExpensesReport::generate(records).format_terminal());
    println!("{}", MonthlyCashbackReport::generate(records).format_terminal());
    println!("{}", SpendingTrendReport::generate(records).format_terminal());
    println!("{}", TravelCostReport::generate(records).format_terminal());
    println!("{}", WeekdayGroceryReport::generate(records).format_terminal());
    println!("{}", PriorityTotalsReport::generate(records).format_terminal());
    println!("{}", TopCategoryShareReport::generate(records).format_terminal());
}

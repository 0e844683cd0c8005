//! CLI argument definitions for navmark.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Compare a fund's NAV history against a benchmark index.
///
/// Input files are JSON arrays of `{"date": "MM/DD/YYYY", "nav": "..."}`
/// records as returned by the daily-values store.
#[derive(Debug, Parser)]
#[command(name = "navmark", version, about = "Fund NAV vs. benchmark comparison engine")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Resolve lookback windows against this MM/DD/YYYY date instead of
    /// today. Useful for reproducible runs.
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Aligned, base-100 normalized series for overlay charting.
    Chart(ChartArgs),
    /// Return over one lookback window for a single series.
    Returns(ReturnsArgs),
    /// Per-window comparison table with projected investment values.
    Compare(CompareArgs),
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Fund NAV records (JSON file).
    pub fund: PathBuf,

    /// Benchmark index records (JSON file).
    pub benchmark: PathBuf,

    /// Restrict the chart to one lookback window (1M, 3M, 6M, 1Y, 3Y, 5Y, ALL).
    #[arg(long, default_value = "ALL")]
    pub window: String,
}

#[derive(Debug, Args)]
pub struct ReturnsArgs {
    /// Series records (JSON file).
    pub series: PathBuf,

    /// Lookback window (1M, 3M, 6M, 1Y, 3Y, 5Y, ALL).
    #[arg(long, default_value = "ALL")]
    pub window: String,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Fund NAV records (JSON file).
    pub fund: PathBuf,

    /// Benchmark index records (JSON file).
    pub benchmark: PathBuf,

    /// Notional amount invested in each instrument.
    #[arg(long, default_value_t = navmark_core::DEFAULT_PRINCIPAL)]
    pub principal: f64,

    /// JSON object of published official simple-return percentages keyed by
    /// window code, used for the fund side in place of recomputation.
    #[arg(long)]
    pub official: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

use std::str::FromStr;

use navmark_core::{align, chart_view, AlignedPair, LookbackWindow, NavDate};

use crate::cli::ChartArgs;
use crate::error::CliError;

use super::{load_series, CommandResult};

pub fn run(args: &ChartArgs, today: NavDate) -> Result<CommandResult, CliError> {
    let window = LookbackWindow::from_str(&args.window)?;

    let (fund, fund_warning) = load_series(&args.fund, "fund")?;
    let (benchmark, benchmark_warning) = load_series(&args.benchmark, "benchmark")?;

    let pair = align(&fund, &benchmark);
    let start = window.start_instant(today);
    let windowed = AlignedPair {
        fund: pair.fund.from_instant(start),
        benchmark: pair.benchmark.from_instant(start),
    };

    let view = chart_view(&windowed)?;
    let no_data = view.is_empty();

    let mut result = CommandResult::ok(serde_json::to_value(view)?);
    if let Some(warning) = fund_warning {
        result = result.with_warning(warning);
    }
    if let Some(warning) = benchmark_warning {
        result = result.with_warning(warning);
    }
    if no_data {
        result = result.with_warning(format!(
            "no overlapping data points in window {window}; chart will be empty"
        ));
    }

    Ok(result)
}

use navmark_core::{align, build_comparison, table_view, NavDate, OfficialReturns};

use crate::cli::CompareArgs;
use crate::error::CliError;

use super::{load_series, CommandResult};

pub fn run(args: &CompareArgs, today: NavDate) -> Result<CommandResult, CliError> {
    let (fund, fund_warning) = load_series(&args.fund, "fund")?;
    let (benchmark, benchmark_warning) = load_series(&args.benchmark, "benchmark")?;

    let official = match &args.official {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|error| {
                CliError::Command(format!("cannot read {}: {error}", path.display()))
            })?;
            serde_json::from_str::<OfficialReturns>(&text)?
        }
        None => OfficialReturns::new(),
    };

    let pair = align(&fund, &benchmark);
    let no_overlap = pair.is_empty();

    let rows = build_comparison(&pair, today, args.principal, &official)?;
    let table = table_view(&rows, args.principal);

    let mut result = CommandResult::ok(serde_json::to_value(table)?);
    if let Some(warning) = fund_warning {
        result = result.with_warning(warning);
    }
    if let Some(warning) = benchmark_warning {
        result = result.with_warning(warning);
    }
    if no_overlap {
        result = result
            .with_warning("fund and benchmark share no dates; every row reports insufficient data");
    }

    Ok(result)
}

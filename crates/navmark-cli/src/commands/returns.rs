use std::str::FromStr;

use navmark_core::{window_return, LookbackWindow, NavDate};

use crate::cli::ReturnsArgs;
use crate::error::CliError;

use super::{load_series, CommandResult};

pub fn run(args: &ReturnsArgs, today: NavDate) -> Result<CommandResult, CliError> {
    let window = LookbackWindow::from_str(&args.window)?;
    let (series, warning) = load_series(&args.series, "series")?;

    let result = window_return(&series, window, today).map_err(|error| match error {
        navmark_core::EngineError::InsufficientData => CliError::InsufficientData(format!(
            "series has no points in window {window}"
        )),
        other => CliError::from(other),
    })?;

    let mut command_result = CommandResult::ok(serde_json::to_value(result)?);
    if let Some(warning) = warning {
        command_result = command_result.with_warning(warning);
    }

    Ok(command_result)
}

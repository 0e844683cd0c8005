mod chart;
mod compare;
mod returns;

use std::path::Path;

use navmark_core::{parse_series_counted, NavDate, RawRecord, Series};
use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Response wrapper around every command's payload.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub request_id: String,
    pub generated_at: String,
    pub warnings: Vec<String>,
    pub data: Value,
}

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope, CliError> {
    let today = resolve_as_of(cli.as_of.as_deref())?;

    let command_result = match &cli.command {
        Command::Chart(args) => chart::run(args, today)?,
        Command::Returns(args) => returns::run(args, today)?,
        Command::Compare(args) => compare::run(args, today)?,
    };

    Ok(Envelope {
        request_id: Uuid::new_v4().to_string(),
        generated_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .expect("UTC now must be RFC3339 formattable"),
        warnings: command_result.warnings,
        data: command_result.data,
    })
}

fn resolve_as_of(as_of: Option<&str>) -> Result<NavDate, CliError> {
    match as_of {
        Some(input) => Ok(NavDate::parse_mdy(input)?),
        None => Ok(NavDate::from_date(OffsetDateTime::now_utc().date())),
    }
}

/// Read a JSON record file and parse it leniently; malformed records become
/// a warning rather than a failure, matching the engine's drop semantics.
pub(crate) fn load_series(path: &Path, label: &str) -> Result<(Series, Option<String>), CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|error| CliError::Command(format!("cannot read {}: {error}", path.display())))?;
    let records: Vec<RawRecord> = serde_json::from_str(&text)?;

    let outcome = parse_series_counted(&records);
    let warning = (outcome.dropped > 0).then(|| {
        format!(
            "{label}: dropped {} malformed record(s) out of {}",
            outcome.dropped,
            records.len()
        )
    });

    Ok((outcome.series, warning))
}

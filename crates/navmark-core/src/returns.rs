//! Endpoint return computation and lookback-window filtering.

use serde::{Deserialize, Serialize};

use crate::domain::{LookbackWindow, NavDate, Series};
use crate::error::{EngineError, ValidationError};

/// Average calendar-year length used to convert day spans to years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Return between the first and last points of a (filtered) series.
///
/// `annualized_return_pct` is present only when the elapsed span reaches a
/// full year; below that the compounding formula would exaggerate
/// short-horizon moves, and [`ReturnResult::annualized_or_simple`] falls
/// back to the simple figure instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnResult {
    pub start_instant: NavDate,
    pub end_instant: NavDate,
    pub start_value: f64,
    pub end_value: f64,
    pub simple_return_pct: f64,
    pub annualized_return_pct: Option<f64>,
}

impl ReturnResult {
    pub fn elapsed_years(&self) -> f64 {
        self.end_instant.days_since(self.start_instant) as f64 / DAYS_PER_YEAR
    }

    /// The annualized figure for multi-year spans, the simple figure below
    /// one year.
    pub fn annualized_or_simple(&self) -> f64 {
        self.annualized_return_pct
            .unwrap_or(self.simple_return_pct)
    }
}

/// Compute the return over a whole series.
///
/// An empty series is `InsufficientData`, never a fabricated 0%. A single
/// point is a degenerate zero-length span and computes a 0% return.
pub fn compute_return(series: &Series) -> Result<ReturnResult, EngineError> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(EngineError::InsufficientData),
    };

    // A start value of zero cannot occur in valid NAV/index data; failing
    // here keeps division-by-zero out of the percentage below.
    if first.value == 0.0 {
        return Err(ValidationError::InvalidBase { value: first.value }.into());
    }

    let simple_return_pct = (last.value - first.value) / first.value * 100.0;
    let elapsed_years = last.instant.days_since(first.instant) as f64 / DAYS_PER_YEAR;

    let ratio = last.value / first.value;
    let annualized_return_pct = if elapsed_years >= 1.0 && ratio > 0.0 {
        Some((ratio.powf(1.0 / elapsed_years) - 1.0) * 100.0)
    } else {
        None
    };

    Ok(ReturnResult {
        start_instant: first.instant,
        end_instant: last.instant,
        start_value: first.value,
        end_value: last.value,
        simple_return_pct,
        annualized_return_pct,
    })
}

/// Filter `series` to the window resolved against `today`, then compute.
pub fn window_return(
    series: &Series,
    window: LookbackWindow,
    today: NavDate,
) -> Result<ReturnResult, EngineError> {
    let filtered = series.from_instant(window.start_instant(today));
    compute_return(&filtered)
}

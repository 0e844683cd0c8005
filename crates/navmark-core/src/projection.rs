//! Fixed-notional investment projection and the per-window comparison table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::align::AlignedPair;
use crate::domain::{LookbackWindow, NavDate, Series};
use crate::error::{EngineError, ValidationError};
use crate::returns::window_return;

/// Notional invested when the caller does not specify one.
pub const DEFAULT_PRINCIPAL: f64 = 10_000.0;

/// Ending value of `principal` after a simple return, rounded to the
/// nearest whole unit.
pub fn project_value(principal: f64, simple_return_pct: f64) -> f64 {
    (principal * (1.0 + simple_return_pct / 100.0)).round()
}

/// One instrument's result for one window: where the hypothetical
/// investment starts, what it returns, and what it ends up worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowOutcome {
    pub invested_on: NavDate,
    pub simple_return_pct: f64,
    pub annualized_return_pct: Option<f64>,
    pub projected_value: f64,
}

/// One comparison-table row. An absent side means the window has no
/// overlapping data; it is rendered as "insufficient data", never 0%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub window: LookbackWindow,
    pub fund: Option<WindowOutcome>,
    pub benchmark: Option<WindowOutcome>,
}

/// Map of published official simple-return percentages keyed by window.
pub type OfficialReturns = BTreeMap<LookbackWindow, f64>;

/// Build one row per lookback window from an aligned pair.
///
/// Each window is computed independently from its own resolved start date.
/// When `official` carries a figure for a window, it replaces the fund's
/// computed simple return and drives the fund projection, keeping the table
/// consistent with the separately published number; the benchmark side is
/// always computed from the raw data, since no official benchmark feed
/// exists. The fund's annualized figure still comes from the data.
pub fn build_comparison(
    pair: &AlignedPair,
    today: NavDate,
    principal: f64,
    official: &OfficialReturns,
) -> Result<Vec<ComparisonRow>, EngineError> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(ValidationError::InvalidPrincipal { value: principal }.into());
    }

    for (window, pct) in official {
        if !pct.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: window.as_str(),
            }
            .into());
        }
    }

    LookbackWindow::ALL_WINDOWS
        .iter()
        .map(|&window| {
            let fund = window_outcome(
                &pair.fund,
                window,
                today,
                principal,
                official.get(&window).copied(),
            )?;
            let benchmark = window_outcome(&pair.benchmark, window, today, principal, None)?;

            Ok(ComparisonRow {
                window,
                fund,
                benchmark,
            })
        })
        .collect()
}

fn window_outcome(
    series: &Series,
    window: LookbackWindow,
    today: NavDate,
    principal: f64,
    official_pct: Option<f64>,
) -> Result<Option<WindowOutcome>, EngineError> {
    let result = match window_return(series, window, today) {
        Ok(result) => result,
        Err(EngineError::InsufficientData) => return Ok(None),
        Err(error) => return Err(error),
    };

    let simple_return_pct = official_pct.unwrap_or(result.simple_return_pct);

    Ok(Some(WindowOutcome {
        invested_on: result.start_instant,
        simple_return_pct,
        annualized_return_pct: result.annualized_return_pct,
        projected_value: project_value(principal, simple_return_pct),
    }))
}

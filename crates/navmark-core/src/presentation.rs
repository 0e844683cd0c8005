//! Chart-ready and table-ready shapes handed to the rendering layer.
//!
//! This is the engine's output boundary: everything here serializes
//! losslessly to JSON, and display rounding happens here rather than in the
//! calculators.

use serde::{Deserialize, Serialize};

use crate::align::AlignedPair;
use crate::domain::{LookbackWindow, NavDate};
use crate::error::EngineError;
use crate::normalize::{normalize, NormalizedSeries};
use crate::projection::ComparisonRow;

/// Both instruments rebased to a common index for overlay charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub fund: NormalizedSeries,
    pub benchmark: NormalizedSeries,
}

impl ChartView {
    pub fn is_empty(&self) -> bool {
        self.fund.is_empty()
    }
}

/// Normalize both halves of an aligned pair, each anchored at its own first
/// point. An empty pair produces an empty view; the chart layer renders its
/// "no data available" state for that.
pub fn chart_view(pair: &AlignedPair) -> Result<ChartView, EngineError> {
    Ok(ChartView {
        fund: normalize(&pair.fund, None)?,
        benchmark: normalize(&pair.benchmark, None)?,
    })
}

/// Flattened comparison-table row; absent figures serialize as nulls and
/// render as "insufficient data".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub window: LookbackWindow,
    pub invested_on: Option<NavDate>,
    pub fund_projected_value: Option<f64>,
    pub benchmark_projected_value: Option<f64>,
    pub fund_simple_return_pct: Option<f64>,
    pub benchmark_simple_return_pct: Option<f64>,
    pub fund_annualized_return_pct: Option<f64>,
}

/// The returns-table payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub principal: f64,
    pub rows: Vec<TableRow>,
}

/// Flatten engine rows into the table contract, rounding percentages to the
/// two decimals the table displays.
pub fn table_view(rows: &[ComparisonRow], principal: f64) -> ComparisonTable {
    ComparisonTable {
        principal,
        rows: rows
            .iter()
            .map(|row| TableRow {
                window: row.window,
                invested_on: row
                    .fund
                    .map(|outcome| outcome.invested_on)
                    .or_else(|| row.benchmark.map(|outcome| outcome.invested_on)),
                fund_projected_value: row.fund.map(|outcome| outcome.projected_value),
                benchmark_projected_value: row.benchmark.map(|outcome| outcome.projected_value),
                fund_simple_return_pct: row.fund.map(|outcome| round2(outcome.simple_return_pct)),
                benchmark_simple_return_pct: row
                    .benchmark
                    .map(|outcome| round2(outcome.simple_return_pct)),
                fund_annualized_return_pct: row
                    .fund
                    .and_then(|outcome| outcome.annualized_return_pct)
                    .map(round2),
            })
            .collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

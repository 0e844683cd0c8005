//! Time-series alignment and return-computation engine for navmark.
//!
//! This crate contains:
//! - Domain value objects (dates, points, series, lookback windows)
//! - Raw-record parsing with per-record fault absorption
//! - Date alignment of fund and benchmark series
//! - Base-100 normalization for overlay charting
//! - Simple/annualized return computation over lookback windows
//! - Fixed-notional investment projection and the comparison table
//!
//! Everything is a pure function over immutable inputs; fetching records and
//! rendering output live outside this crate.

pub mod align;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod presentation;
pub mod projection;
pub mod returns;

pub use align::{align, AlignedPair};
pub use domain::{LookbackWindow, NavDate, Point, RawRecord, Series};
pub use error::{EngineError, ValidationError};
pub use normalize::{normalize, NormalizedPoint, NormalizedSeries, BASE_INDEX};
pub use parser::{parse_series, parse_series_counted, ParseOutcome};
pub use presentation::{chart_view, table_view, ChartView, ComparisonTable, TableRow};
pub use projection::{
    build_comparison, project_value, ComparisonRow, OfficialReturns, WindowOutcome,
    DEFAULT_PRINCIPAL,
};
pub use returns::{compute_return, window_return, ReturnResult, DAYS_PER_YEAR};

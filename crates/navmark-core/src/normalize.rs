//! Base-100 rescaling for visual comparison of series with different scales.

use serde::{Deserialize, Serialize};

use crate::domain::{NavDate, Series};
use crate::error::{EngineError, ValidationError};

/// Index value the anchor point rescales to.
pub const BASE_INDEX: f64 = 100.0;

/// Rescaled observation carrying its pre-normalization value.
///
/// The original value is a required output field: once further transforms
/// run, it is not reconstructible from the normalized value alone, and the
/// presentation layer shows both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub instant: NavDate,
    pub normalized_value: f64,
    pub original_value: f64,
}

/// Series rescaled so its anchor value reads as [`BASE_INDEX`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries(Vec<NormalizedPoint>);

impl NormalizedSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.0
    }
}

/// Rescale `series` against `base` (default: its own first value).
///
/// A zero or non-finite base signals corrupt upstream data and fails the
/// call; a valid NAV or index level can never be exactly zero, so this is
/// never silently turned into `Infinity`. An empty series normalizes to an
/// empty series.
pub fn normalize(series: &Series, base: Option<f64>) -> Result<NormalizedSeries, EngineError> {
    let Some(first) = series.first() else {
        return Ok(NormalizedSeries::default());
    };

    let base = base.unwrap_or(first.value);
    if !base.is_finite() || base == 0.0 {
        return Err(ValidationError::InvalidBase { value: base }.into());
    }

    Ok(NormalizedSeries(
        series
            .iter()
            .map(|point| NormalizedPoint {
                instant: point.instant,
                normalized_value: point.value / base * BASE_INDEX,
                original_value: point.value,
            })
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_series;
    use crate::RawRecord;

    fn series(records: &[(&str, &str)]) -> Series {
        let raw: Vec<RawRecord> = records
            .iter()
            .map(|(date, value)| RawRecord::new(*date, *value))
            .collect();
        parse_series(&raw)
    }

    #[test]
    fn anchors_first_point_at_base_index() {
        let series = series(&[("01/01/2024", "50.0"), ("02/01/2024", "75.0")]);

        let normalized = normalize(&series, None).expect("valid base");
        let points = normalized.points();

        assert_eq!(points[0].normalized_value, 100.0);
        assert_eq!(points[1].normalized_value, 150.0);
        assert_eq!(points[0].original_value, 50.0);
        assert_eq!(points[1].original_value, 75.0);
    }

    #[test]
    fn honors_explicit_base() {
        let series = series(&[("01/01/2024", "50.0")]);

        let normalized = normalize(&series, Some(200.0)).expect("valid base");
        assert_eq!(normalized.points()[0].normalized_value, 25.0);
    }

    #[test]
    fn empty_series_normalizes_to_empty() {
        let normalized = normalize(&Series::default(), None).expect("empty is fine");
        assert!(normalized.is_empty());
    }

    #[test]
    fn rejects_zero_and_non_finite_bases() {
        let series = series(&[("01/01/2024", "50.0")]);

        for base in [0.0, f64::NAN, f64::INFINITY] {
            let err = normalize(&series, Some(base)).expect_err("must fail");
            assert!(matches!(
                err,
                EngineError::Validation(ValidationError::InvalidBase { .. })
            ));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::NavDate;

/// Raw daily record as returned by the backing store.
///
/// Both fields arrive as strings; `nav` is accepted as an alias because the
/// store names the value column that way for funds and benchmarks alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    #[serde(alias = "nav")]
    pub value: String,
}

impl RawRecord {
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: value.into(),
        }
    }
}

/// Single validated observation: one value on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub instant: NavDate,
    pub value: f64,
}

impl Point {
    pub fn new(instant: NavDate, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "value" });
        }
        Ok(Self { instant, value })
    }
}

/// Immutable ordered sequence of points, strictly increasing by instant.
///
/// Built once by the parser; every derived view (window filter, alignment
/// projection, normalization) is a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series(Vec<Point>);

impl Series {
    /// Wrap pre-validated points. The parser is the canonical producer;
    /// callers constructing a series directly must supply sorted,
    /// duplicate-free points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// New series keeping only points with `instant >= start`.
    pub fn from_instant(&self, start: NavDate) -> Self {
        Self(
            self.0
                .iter()
                .filter(|point| point.instant >= start)
                .copied()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Date alignment of two independently sampled series.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{NavDate, Point, Series};

/// Two equal-length series sharing the same instant at every index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub fund: Series,
    pub benchmark: Series,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.fund.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fund.is_empty()
    }
}

/// Project both series onto their common dates, preserving ascending order.
///
/// Zero overlap is a valid outcome and yields an empty pair, not an error;
/// downstream consumers branch on emptiness.
pub fn align(fund: &Series, benchmark: &Series) -> AlignedPair {
    let benchmark_by_instant: HashMap<NavDate, f64> = benchmark
        .iter()
        .map(|point| (point.instant, point.value))
        .collect();

    let mut fund_points: Vec<Point> = Vec::new();
    let mut benchmark_points: Vec<Point> = Vec::new();

    for point in fund {
        if let Some(&benchmark_value) = benchmark_by_instant.get(&point.instant) {
            fund_points.push(*point);
            benchmark_points.push(Point {
                instant: point.instant,
                value: benchmark_value,
            });
        }
    }

    AlignedPair {
        fund: Series::from_points(fund_points),
        benchmark: Series::from_points(benchmark_points),
    }
}

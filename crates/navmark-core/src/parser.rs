//! Raw-record parsing: store records in, validated sorted series out.

use crate::domain::{NavDate, Point, RawRecord, Series};

/// Outcome of a lenient parse: the series plus how many records were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub series: Series,
    pub dropped: usize,
}

/// Parse raw records into a sorted series, silently dropping malformed rows.
pub fn parse_series(records: &[RawRecord]) -> Series {
    parse_series_counted(records).series
}

/// Like [`parse_series`], but reports the number of dropped records so
/// callers can surface a warning when source data was partially unusable.
///
/// A record is dropped when its date is not a valid `MM/DD/YYYY` calendar
/// date or its value does not parse to a finite number. Surviving points are
/// stably sorted ascending by instant; duplicate instants collapse to the
/// record appearing later in input order, matching the backing store's
/// upsert semantics.
pub fn parse_series_counted(records: &[RawRecord]) -> ParseOutcome {
    let mut points: Vec<Point> = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let instant = match NavDate::parse_mdy(&record.date) {
            Ok(instant) => instant,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };

        let parsed = record.value.trim().parse::<f64>();
        let point = match parsed.ok().and_then(|value| Point::new(instant, value).ok()) {
            Some(point) => point,
            None => {
                dropped += 1;
                continue;
            }
        };

        points.push(point);
    }

    // Stable sort keeps input order within equal instants, so keeping the
    // last element of each run implements last-write-wins.
    points.sort_by_key(|point| point.instant);

    let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        match deduped.last_mut() {
            Some(previous) if previous.instant == point.instant => *previous = point,
            _ => deduped.push(point),
        }
    }

    ParseOutcome {
        series: Series::from_points(deduped),
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, value: &str) -> RawRecord {
        RawRecord::new(date, value)
    }

    #[test]
    fn sorts_records_ascending_by_instant() {
        let series = parse_series(&[
            record("03/01/2024", "103.0"),
            record("01/01/2024", "101.0"),
            record("02/01/2024", "102.0"),
        ]);

        let instants: Vec<String> = series.iter().map(|p| p.instant.format_mdy()).collect();
        assert_eq!(instants, ["01/01/2024", "02/01/2024", "03/01/2024"]);
    }

    #[test]
    fn drops_malformed_records_without_aborting() {
        let outcome = parse_series_counted(&[
            record("01/01/2024", "100.0"),
            record("not-a-date", "101.0"),
            record("01/03/2024", "not-a-number"),
            record("01/04/2024", "NaN"),
            record("01/05/2024", "104.5"),
        ]);

        assert_eq!(outcome.dropped, 3);
        assert_eq!(outcome.series.len(), 2);
        assert_eq!(outcome.series.last().expect("non-empty").value, 104.5);
    }

    #[test]
    fn duplicate_instants_keep_the_later_record() {
        let series = parse_series(&[
            record("01/02/2024", "100.0"),
            record("01/02/2024", "105.0"),
            record("01/01/2024", "99.0"),
        ]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.last().expect("non-empty").value, 105.0);
    }

    #[test]
    fn empty_and_fully_malformed_inputs_yield_empty_series() {
        assert!(parse_series(&[]).is_empty());
        assert!(parse_series(&[record("bad", "data")]).is_empty());
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::{Date, Month};

use crate::ValidationError;

/// Calendar date at day resolution, the instant type of every series point.
///
/// Parsed from and rendered as `MM/DD/YYYY`, the backing store's date shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavDate(Date);

impl NavDate {
    /// Minimum representable date; the lower bound the `ALL` window resolves to.
    pub const MIN: Self = Self(Date::MIN);

    /// Parse a positional `MM/DD/YYYY` date string.
    pub fn parse_mdy(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            value: input.to_owned(),
        };

        let mut parts = input.trim().splitn(3, '/');
        let month: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let day: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;

        let month = Month::try_from(month).map_err(|_| invalid())?;
        let date = Date::from_calendar_date(year, month, day).map_err(|_| invalid())?;

        Ok(Self(date))
    }

    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    /// Calendar-aware month subtraction with end-of-month clamping:
    /// Mar 31 - 1 month = Feb 28 (or Feb 29 in leap years).
    pub fn minus_months(self, months: u32) -> Self {
        let total = self.0.year() as i64 * 12 + (self.0.month() as u8 as i64 - 1) - months as i64;
        let year = total.div_euclid(12) as i32;
        let month = Month::try_from((total.rem_euclid(12) + 1) as u8)
            .expect("month index in 1..=12 after euclidean remainder");

        let day = self.0.day().min(month.length(year));
        let date = Date::from_calendar_date(year, month, day)
            .expect("clamped day must be valid for the target month");

        Self(date)
    }

    /// Year subtraction; Feb 29 clamps to Feb 28 in non-leap target years.
    pub fn minus_years(self, years: u32) -> Self {
        self.minus_months(years * 12)
    }

    /// Signed whole-day distance from `earlier` to `self`.
    pub const fn days_since(self, earlier: Self) -> i64 {
        self.0.to_julian_day() as i64 - earlier.0.to_julian_day() as i64
    }

    pub fn format_mdy(self) -> String {
        self.0
            .format(format_description!("[month]/[day]/[year]"))
            .expect("NavDate must be MM/DD/YYYY formattable")
    }
}

impl Display for NavDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_mdy())
    }
}

impl FromStr for NavDate {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_mdy(value)
    }
}

impl Serialize for NavDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_mdy())
    }
}

impl<'de> Deserialize<'de> for NavDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse_mdy(&value).map_err(D::Error::custom)
    }
}

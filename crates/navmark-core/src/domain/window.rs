use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::NavDate;

/// Symbolic trailing period bounding a return calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LookbackWindow {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "ALL")]
    All,
}

impl LookbackWindow {
    pub const ALL_WINDOWS: [Self; 7] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::ThreeYears,
        Self::FiveYears,
        Self::All,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::ThreeYears => "3Y",
            Self::FiveYears => "5Y",
            Self::All => "ALL",
        }
    }

    /// Resolve the window to its start instant relative to an explicit
    /// `today`. Month windows subtract calendar months, year windows
    /// calendar years; `ALL` places no lower bound.
    pub fn start_instant(self, today: NavDate) -> NavDate {
        match self {
            Self::OneMonth => today.minus_months(1),
            Self::ThreeMonths => today.minus_months(3),
            Self::SixMonths => today.minus_months(6),
            Self::OneYear => today.minus_years(1),
            Self::ThreeYears => today.minus_years(3),
            Self::FiveYears => today.minus_years(5),
            Self::All => NavDate::MIN,
        }
    }
}

impl Display for LookbackWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookbackWindow {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "3Y" => Ok(Self::ThreeYears),
            "5Y" => Ok(Self::FiveYears),
            "ALL" => Ok(Self::All),
            other => Err(ValidationError::InvalidWindow {
                value: other.to_owned(),
            }),
        }
    }
}

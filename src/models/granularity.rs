//! Time units and the granularities a duration can be broken into.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::format::FormatError;

/// Seconds in one minute.
pub const MINUTE_SECONDS: u64 = 60;

/// A single time unit with a fixed length in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Second,
    Hour,
    Day,
    Week,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Second, Unit::Hour, Unit::Day, Unit::Week];

    /// Length of the unit in seconds.
    pub const fn seconds(self) -> u64 {
        match self {
            Unit::Second => 1,
            Unit::Hour => 60 * MINUTE_SECONDS,
            Unit::Day => 24 * 60 * MINUTE_SECONDS,
            Unit::Week => 7 * 24 * 60 * MINUTE_SECONDS,
        }
    }

    /// Singular English word for the unit.
    pub const fn word(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.word())
    }
}

/// Requested breakdown of a duration.
///
/// Deserializes through [`FromStr`], so names are matched the same way
/// everywhere: case-insensitive, with `day hour` and `dayhour` accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Granularity {
    /// Whole hours
    Hour,
    /// Whole days
    Day,
    /// Whole weeks
    Week,
    /// Whole days followed by the hours left over
    #[default]
    DayHour,
}

impl Granularity {
    /// All granularities, in declaration order.
    pub const ALL: [Granularity; 4] = [
        Granularity::Hour,
        Granularity::Day,
        Granularity::Week,
        Granularity::DayHour,
    ];

    /// Units produced by this granularity, most significant first.
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Granularity::Hour => &[Unit::Hour],
            Granularity::Day => &[Unit::Day],
            Granularity::Week => &[Unit::Week],
            Granularity::DayHour => &[Unit::Day, Unit::Hour],
        }
    }
}

impl TryFrom<String> for Granularity {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Hour => write!(f, "hour"),
            Granularity::Day => write!(f, "day"),
            Granularity::Week => write!(f, "week"),
            Granularity::DayHour => write!(f, "day-hour"),
        }
    }
}

impl FromStr for Granularity {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "day-hour" | "day hour" | "dayhour" => Ok(Granularity::DayHour),
            _ => Err(FormatError::UnsupportedGranularity(s.to_string())),
        }
    }
}

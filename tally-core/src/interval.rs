//! Tracking and display granularities

use crate::calendar::{self, CalendarField, Timestamp};
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

/// Granularity at which a counter is tracked or a chart page is displayed.
///
/// The derived ordering is the total order used for goal projection:
/// `Hour < Day < Week < Month < Year < Ytd < Lifetime`. `Ytd` and `Lifetime`
/// are lookback windows and have no bucket size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Hour,
    Day,
    Week,
    Month,
    Year,
    Ytd,
    Lifetime,
}

impl Interval {
    pub const ALL: [Interval; 7] = [
        Interval::Hour,
        Interval::Day,
        Interval::Week,
        Interval::Month,
        Interval::Year,
        Interval::Ytd,
        Interval::Lifetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Hour => "hour",
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
            Interval::Ytd => "ytd",
            Interval::Lifetime => "lifetime",
        }
    }

    /// Calendar field this interval spans, used for page truncation.
    pub fn calendar_field(&self) -> Option<CalendarField> {
        match self {
            Interval::Hour => Some(CalendarField::Hour),
            Interval::Day => Some(CalendarField::Day),
            Interval::Week => Some(CalendarField::Week),
            Interval::Month => Some(CalendarField::Month),
            Interval::Year => Some(CalendarField::Year),
            Interval::Ytd | Interval::Lifetime => None,
        }
    }

    /// Calendar field of one bucket when this interval is a chart page.
    pub fn bucket_field(&self) -> Option<CalendarField> {
        match self {
            Interval::Hour => Some(CalendarField::Minute),
            Interval::Day => Some(CalendarField::Hour),
            Interval::Week | Interval::Month => Some(CalendarField::Day),
            Interval::Year => Some(CalendarField::Month),
            Interval::Ytd | Interval::Lifetime => None,
        }
    }

    /// Number of buckets in the page starting at `range_start`.
    ///
    /// Month pages have one bucket per day of `range_start`'s month.
    pub fn bucket_count(&self, range_start: Timestamp) -> Option<u32> {
        match self {
            Interval::Hour => Some(60),
            Interval::Day => Some(24),
            Interval::Week => Some(7),
            Interval::Month => Some(calendar::days_in_month(
                range_start.year(),
                range_start.month(),
            )),
            Interval::Year => Some(12),
            Interval::Ytd | Interval::Lifetime => None,
        }
    }

    /// Start of the window "this interval" refers to at `now`.
    ///
    /// `None` means unbounded (lifetime).
    pub fn window_start(&self, now: Timestamp, first_day: Weekday) -> Option<Timestamp> {
        match self {
            Interval::Ytd => Some(calendar::truncate_to(now, CalendarField::Year, first_day)),
            Interval::Lifetime => None,
            _ => self
                .calendar_field()
                .map(|field| calendar::truncate_to(now, field, first_day)),
        }
    }

    /// Whether averages for counters tracked at this interval are per hour.
    pub fn averages_hourly(&self) -> bool {
        matches!(self, Interval::Hour | Interval::Day)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hour" => Ok(Interval::Hour),
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            "ytd" => Ok(Interval::Ytd),
            "lifetime" => Ok(Interval::Lifetime),
            _ => Err(format!("unknown interval: {}", s)),
        }
    }
}

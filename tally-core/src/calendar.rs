//! Calendar field truncation and arithmetic
//!
//! All functions are pure transforms over wall-clock [`Timestamp`]s: a cursor
//! is never mutated in place, every step returns a new value.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Local wall-clock time of an entry or range boundary.
pub type Timestamp = NaiveDateTime;

/// Calendar units used for truncation, stepping and unit counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarField {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl CalendarField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarField::Minute => "minute",
            CalendarField::Hour => "hour",
            CalendarField::Day => "day",
            CalendarField::Week => "week",
            CalendarField::Month => "month",
            CalendarField::Year => "year",
        }
    }
}

impl std::fmt::Display for CalendarField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Zero every component finer than `field`.
///
/// `Week` rewinds to the most recent `first_day` at or before the day of `ts`.
/// The other fields ignore `first_day`.
pub fn truncate_to(ts: Timestamp, field: CalendarField, first_day: Weekday) -> Timestamp {
    let date = ts.date();
    match field {
        CalendarField::Minute => date.and_time(
            NaiveTime::from_hms_opt(ts.hour(), ts.minute(), 0).unwrap_or(NaiveTime::MIN),
        ),
        CalendarField::Hour => {
            date.and_time(NaiveTime::from_hms_opt(ts.hour(), 0, 0).unwrap_or(NaiveTime::MIN))
        }
        CalendarField::Day => date.and_time(NaiveTime::MIN),
        CalendarField::Week => {
            let back = days_since_week_start(date.weekday(), first_day);
            let start = date
                .checked_sub_signed(TimeDelta::days(back))
                .unwrap_or(NaiveDate::MIN);
            start.and_time(NaiveTime::MIN)
        }
        CalendarField::Month => first_of_month(date.year(), date.month()).and_time(NaiveTime::MIN),
        CalendarField::Year => first_of_month(date.year(), 1).and_time(NaiveTime::MIN),
    }
}

/// Add `n` whole units of `field` to `ts` (`n` may be negative).
///
/// Months and years follow calendar semantics: the day of month is clamped to
/// the length of the target month, so Jan 31 + 1 month is the last day of
/// February.
pub fn add_units(ts: Timestamp, field: CalendarField, n: i64) -> Timestamp {
    let shifted = match field {
        CalendarField::Minute => TimeDelta::try_minutes(n).and_then(|d| ts.checked_add_signed(d)),
        CalendarField::Hour => TimeDelta::try_hours(n).and_then(|d| ts.checked_add_signed(d)),
        CalendarField::Day => TimeDelta::try_days(n).and_then(|d| ts.checked_add_signed(d)),
        CalendarField::Week => TimeDelta::try_weeks(n).and_then(|d| ts.checked_add_signed(d)),
        CalendarField::Month => add_months(ts, n),
        CalendarField::Year => n.checked_mul(12).and_then(|months| add_months(ts, months)),
    };

    shifted.unwrap_or(if n < 0 {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    })
}

fn add_months(ts: Timestamp, n: i64) -> Option<Timestamp> {
    let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
    if n >= 0 {
        ts.checked_add_months(months)
    } else {
        ts.checked_sub_months(months)
    }
}

/// Number of days between `first_day` and `day`, going backwards (0..=6).
pub fn days_since_week_start(day: Weekday, first_day: Weekday) -> i64 {
    let day = i64::from(day.num_days_from_monday());
    let first = i64::from(first_day.num_days_from_monday());
    (day - first).rem_euclid(7)
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of `month` (1-12) in `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

//! Inclusive calendar unit counting
//!
//! Used both for chart page counts and for average rate denominators.

use crate::calendar::{truncate_to, CalendarField, Timestamp};
use crate::error::{Error, Result};
use chrono::{Datelike, Weekday};

/// Count the calendar units touched by `[from, to]`, both ends inclusive.
///
/// Both instants are truncated to `unit` first, so `count_units(Day, t, t)` is 1
/// and two instants exactly one day apart touch 2 days. Months and years are
/// counted by calendar field subtraction, never by elapsed time.
///
/// The result is zero or negative when `to` falls in an earlier unit than
/// `from`; callers treat that as an empty span.
pub fn count_units(
    unit: CalendarField,
    from: Timestamp,
    to: Timestamp,
    first_day: Weekday,
) -> Result<i64> {
    let raw = match unit {
        CalendarField::Hour => {
            (truncate_to(to, unit, first_day) - truncate_to(from, unit, first_day)).num_hours()
        }
        CalendarField::Day => {
            (truncate_to(to, unit, first_day) - truncate_to(from, unit, first_day)).num_days()
        }
        CalendarField::Week => {
            (truncate_to(to, unit, first_day) - truncate_to(from, unit, first_day)).num_days() / 7
        }
        CalendarField::Month => {
            let to_months = i64::from(to.year()) * 12 + i64::from(to.month0());
            let from_months = i64::from(from.year()) * 12 + i64::from(from.month0());
            to_months - from_months
        }
        CalendarField::Year => i64::from(to.year()) - i64::from(from.year()),
        CalendarField::Minute => return Err(Error::UnsupportedUnit(unit)),
    };

    Ok(raw + 1)
}

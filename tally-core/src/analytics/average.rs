//! Period and lifetime average rates
//!
//! Averages are reported per hour for counters tracked hourly or daily and per
//! day otherwise. Denominators come from inclusive unit counting, so a span
//! touching 7 calendar days is 7 days long regardless of time of day.
//!
//! Under [`AverageMode::FirstToLast`] the numerator counts gaps between
//! entries rather than entries, which is why one is subtracted whenever the
//! page holds both the counter's first and last entry.

use crate::analytics::summary::CounterSummary;
use crate::calendar::{add_units, CalendarField, Timestamp};
use crate::context::{AverageMode, StatsContext};
use crate::error::Result;
use crate::format::{format_decimal, pluralize};
use crate::interval::Interval;
use crate::types::Entry;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Unit an average rate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    Hour,
    Day,
}

impl RateUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateUnit::Hour => "hour",
            RateUnit::Day => "day",
        }
    }

    fn calendar_field(&self) -> CalendarField {
        match self {
            RateUnit::Hour => CalendarField::Hour,
            RateUnit::Day => CalendarField::Day,
        }
    }

    /// Unit used for averages of a counter tracked at `interval`.
    pub fn for_interval(interval: Interval) -> Self {
        if interval.averages_hourly() {
            RateUnit::Hour
        } else {
            RateUnit::Day
        }
    }
}

/// `count` occurrences over `units_span` units.
///
/// Displays as `"3.2/day"` when more than one occurrence per unit and as
/// `"every 2.1 days"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub count: u64,
    pub units_span: f64,
    pub per_unit: RateUnit,
}

impl Rate {
    /// Occurrences per unit.
    pub fn value(&self) -> f64 {
        self.count as f64 / self.units_span
    }

    /// Units between occurrences.
    pub fn every(&self) -> f64 {
        self.units_span / self.count as f64
    }

    /// Whether the rate reads better as "N per unit" than as "every N units".
    pub fn is_per_unit(&self) -> bool {
        self.value() > 1.0
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_per_unit() {
            write!(f, "{}/{}", format_decimal(self.value()), self.per_unit.as_str())
        } else {
            write!(
                f,
                "every {}",
                pluralize(&format_decimal(self.every()), self.per_unit.as_str())
            )
        }
    }
}

/// Average rate of the entries of one chart page `[range_start, range_end)`.
///
/// `period_entries` are the counter's entries within the page; `summary`
/// supplies the counter's interval and global first/last entries. Returns
/// `None` when the rate is not applicable.
pub fn period_average(
    period_entries: &[Entry],
    range_start: Timestamp,
    range_end: Timestamp,
    summary: &CounterSummary,
    ctx: &StatsContext,
) -> Result<Option<Rate>> {
    let (Some(first), Some(last)) = (summary.least_recent, summary.most_recent) else {
        return Ok(None);
    };
    if period_entries.is_empty() {
        return Ok(None);
    }

    // Keep the end inside the page so inclusive counting sees 7 days per week
    let page_end = add_units(range_end, CalendarField::Minute, -1);
    let in_range = period_entries.len() as u64;

    let (start, end, count) = match ctx.average_mode {
        AverageMode::FirstToNow => {
            let start = range_start.max(first.min(ctx.now));
            let end = page_end.min(last.max(ctx.now));
            (start, end, in_range)
        }
        AverageMode::FirstToLast => {
            let start = range_start.max(first);
            let end = page_end.min(last);
            // Unclipped page bounds, so an entry in the final minute is still the last one
            let holds_whole_history = first >= range_start && last < range_end;
            let count = if holds_whole_history {
                in_range - 1
            } else {
                in_range
            };
            (start, end, count)
        }
    };

    tracing::debug!(
        counter = %summary.name,
        mode = ?ctx.average_mode,
        start = %start,
        end = %end,
        count,
        "Computing period average"
    );

    rate_over(count, start, end, summary.interval, ctx.first_day_of_week)
}

/// Average rate over the counter's whole history.
pub fn lifetime_average(summary: &CounterSummary, ctx: &StatsContext) -> Result<Option<Rate>> {
    let (Some(first), Some(last)) = (summary.least_recent, summary.most_recent) else {
        return Ok(None);
    };

    let (end, count) = match ctx.average_mode {
        AverageMode::FirstToNow => (last.max(ctx.now), summary.total_count),
        AverageMode::FirstToLast => (last, summary.total_count.saturating_sub(1)),
    };

    rate_over(count, first, end, summary.interval, ctx.first_day_of_week)
}

fn rate_over(
    count: u64,
    start: Timestamp,
    end: Timestamp,
    interval: Interval,
    first_day: Weekday,
) -> Result<Option<Rate>> {
    if count == 0 {
        return Ok(None);
    }

    let unit = RateUnit::for_interval(interval);
    let span = crate::units::count_units(unit.calendar_field(), start, end, first_day)?;
    if span <= 0 {
        return Ok(None);
    }

    Ok(Some(Rate {
        count,
        units_span: span as f64,
        per_unit: unit,
    }))
}

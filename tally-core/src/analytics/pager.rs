//! Chart paging over a counter's history
//!
//! Page 0 holds the counter's first entry; the last page holds the later of
//! the last entry and now.

use crate::analytics::summary::CounterSummary;
use crate::calendar::{add_units, truncate_to, CalendarField, Timestamp};
use crate::context::StatsContext;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::units::count_units;
use chrono::Weekday;

/// Calendar-aligned pages of one display interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPager {
    interval: Interval,
    field: CalendarField,
    first_day: Weekday,
    first_page_start: Timestamp,
    page_count: usize,
}

impl ChartPager {
    /// Build a pager for `summary` at `display`. `None` when the counter has no entries.
    pub fn new(
        display: Interval,
        summary: &CounterSummary,
        ctx: &StatsContext,
    ) -> Result<Option<Self>> {
        let field = display
            .calendar_field()
            .ok_or(Error::NotBucketable(display))?;
        let (Some(first), Some(last)) = (summary.least_recent, summary.most_recent) else {
            return Ok(None);
        };

        let end = last.max(ctx.now);
        let page_count = count_units(field, first, end, ctx.first_day_of_week)?;

        Ok(Some(Self {
            interval: display,
            field,
            first_day: ctx.first_day_of_week,
            first_page_start: truncate_to(first, field, ctx.first_day_of_week),
            page_count: usize::try_from(page_count).unwrap_or(0),
        }))
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Index of the page holding `ts`, if any.
    pub fn page_of(&self, ts: Timestamp) -> Option<usize> {
        let n = count_units(self.field, self.first_page_start, ts, self.first_day).ok()?;
        let index = usize::try_from(n - 1).ok()?;
        (index < self.page_count).then_some(index)
    }

    /// Index of the newest page.
    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    /// `[start, end)` of page `index`.
    pub fn page_range(&self, index: usize) -> Option<(Timestamp, Timestamp)> {
        if index >= self.page_count {
            return None;
        }
        let offset = i64::try_from(index).ok()?;
        let start = add_units(self.first_page_start, self.field, offset);
        Some((start, add_units(start, self.field, 1)))
    }
}

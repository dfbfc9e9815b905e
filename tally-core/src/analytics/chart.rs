//! Chart page assembly
//!
//! Wires the entry source into the bucketizer, goal projection and period
//! average for one page of a counter chart.

use crate::analytics::average::{period_average, Rate};
use crate::analytics::buckets::{
    compute_buckets_for_interval_entries, compute_max_count_for_all_entries,
};
use crate::analytics::goal::project_goal;
use crate::analytics::summary::CounterSummary;
use crate::calendar::{add_units, truncate_to, Timestamp};
use crate::context::StatsContext;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::store::EntrySource;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one chart page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPage {
    pub interval: Interval,
    /// Inclusive page start
    pub start: Timestamp,
    /// Exclusive page end
    pub end: Timestamp,
    /// Entry count per bucket; empty when the page has no entries
    pub buckets: Vec<u32>,
    /// Y-axis scale shared by every page of the chart
    pub max_count: u32,
    /// Goal per bucket, if a goal line applies
    pub goal_line: Option<u32>,
    pub period_average: Option<Rate>,
}

impl ChartPage {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.buckets.iter().sum()
    }
}

/// Y-axis scale for a chart session of `summary` at `display_interval`.
pub fn max_count_for_counter<S: EntrySource + ?Sized>(
    source: &S,
    summary: &CounterSummary,
    display_interval: Interval,
    ctx: &StatsContext,
) -> Result<u32> {
    let entries = source.all_entries_sorted(&summary.name)?;
    compute_max_count_for_all_entries(&entries, display_interval, ctx.first_day_of_week)
}

/// Build the page of `display_interval` containing `page_start`.
///
/// `page_start` is truncated to the display interval, so any instant inside
/// the page selects it.
pub fn build_chart_page<S: EntrySource + ?Sized>(
    source: &S,
    summary: &CounterSummary,
    display_interval: Interval,
    page_start: Timestamp,
    max_count: u32,
    ctx: &StatsContext,
) -> Result<ChartPage> {
    let field = display_interval
        .calendar_field()
        .ok_or(Error::NotBucketable(display_interval))?;
    let start = truncate_to(page_start, field, ctx.first_day_of_week);
    let end = add_units(start, field, 1);

    let entries = source.entries_in_range_sorted(&summary.name, start, end)?;
    let buckets = compute_buckets_for_interval_entries(&entries, display_interval, start)?;
    let goal_line = project_goal(summary.goal, summary.interval, display_interval);
    let period_average = period_average(&entries, start, end, summary, ctx)?;

    tracing::debug!(
        counter = %summary.name,
        interval = %display_interval,
        start = %start,
        entries = entries.len(),
        "Built chart page"
    );

    Ok(ChartPage {
        interval: display_interval,
        start,
        end,
        buckets,
        max_count,
        goal_line,
        period_average,
    })
}

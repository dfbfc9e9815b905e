//! Per-bucket entry counts for chart pages
//!
//! A chart page covers one display interval and is split into buckets of the
//! next finer calendar unit (minutes of an hour, hours of a day, days of a week
//! or month, months of a year). Both operations walk a sorted entry list once
//! with a single forward index while a cursor steps bucket by bucket.
//!
//! An entry at instant `T` belongs to the bucket whose upper bound is strictly
//! greater than `T`, so an entry exactly on a boundary opens the next bucket.

use crate::calendar::{add_units, truncate_to, Timestamp};
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::types::Entry;
use chrono::Weekday;

/// Count entries per bucket for the page `[range_start, range_start + interval)`.
///
/// `entries` must be sorted ascending and lie entirely within the page; this
/// is checked in debug builds only. An empty list yields an empty bucket list,
/// signalling "nothing to chart".
pub fn compute_buckets_for_interval_entries(
    entries: &[Entry],
    interval: Interval,
    range_start: Timestamp,
) -> Result<Vec<u32>> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let (field, num_buckets) = match (interval.bucket_field(), interval.bucket_count(range_start))
    {
        (Some(field), Some(count)) => (field, count as usize),
        _ => return Err(Error::NotBucketable(interval)),
    };

    debug_assert!(
        entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
        "entries must be sorted by timestamp"
    );
    debug_assert!(
        entries[0].timestamp >= range_start,
        "entry at {} precedes page start {}",
        entries[0].timestamp,
        range_start
    );

    let mut buckets = vec![0u32; num_buckets];
    let mut cursor = range_start;
    let mut idx = 0;

    for bucket in buckets.iter_mut() {
        cursor = add_units(cursor, field, 1);
        while idx < entries.len() && entries[idx].timestamp < cursor {
            *bucket += 1;
            idx += 1;
        }
    }

    debug_assert!(
        idx == entries.len(),
        "{} entries fall after page end {}",
        entries.len() - idx,
        cursor
    );

    tracing::debug!(
        interval = %interval,
        range_start = %range_start,
        entries = entries.len(),
        buckets = num_buckets,
        "Computed chart buckets"
    );

    Ok(buckets)
}

/// Largest single bucket count across a counter's whole history.
///
/// Buckets are the sub-units of `interval`, aligned to calendar boundaries
/// starting from the bucket holding the first entry. Fixes the chart's Y axis
/// so paging does not rescale it. Returns 0 for an empty list.
pub fn compute_max_count_for_all_entries(
    entries: &[Entry],
    interval: Interval,
    first_day: Weekday,
) -> Result<u32> {
    let Some(first) = entries.first() else {
        return Ok(0);
    };
    let field = interval
        .bucket_field()
        .ok_or(Error::NotBucketable(interval))?;

    let mut cursor = truncate_to(first.timestamp, field, first_day);
    let mut idx = 0;
    let mut max_count = 0u32;

    while idx < entries.len() {
        // Skip runs of empty buckets in one step
        if entries[idx].timestamp >= add_units(cursor, field, 1) {
            cursor = truncate_to(entries[idx].timestamp, field, first_day);
        }
        cursor = add_units(cursor, field, 1);

        let mut count = 0u32;
        while idx < entries.len() && entries[idx].timestamp < cursor {
            count += 1;
            idx += 1;
        }
        max_count = max_count.max(count);
    }

    tracing::debug!(
        interval = %interval,
        entries = entries.len(),
        max_count,
        "Computed max bucket count"
    );

    Ok(max_count)
}

//! Aggregate view of one counter
//!
//! Derived from the entry source whenever entries change; never persisted.

use crate::calendar::Timestamp;
use crate::context::StatsContext;
use crate::error::Result;
use crate::interval::Interval;
use crate::store::EntrySource;
use crate::types::Counter;
use serde::{Deserialize, Serialize};

/// Counter metadata plus the aggregates charts and averages need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSummary {
    pub name: String,
    pub interval: Interval,
    /// Target count per interval (0 = no goal)
    pub goal: u32,
    pub color: u32,
    /// Entries since the start of the current interval window
    pub last_interval_count: u64,
    pub total_count: u64,
    pub least_recent: Option<Timestamp>,
    pub most_recent: Option<Timestamp>,
}

impl CounterSummary {
    /// Recompute the summary of `counter` from `source` as of `ctx.now`.
    pub fn compute<S: EntrySource + ?Sized>(
        counter: &Counter,
        source: &S,
        ctx: &StatsContext,
    ) -> Result<Self> {
        let window_start = counter
            .interval
            .window_start(ctx.now, ctx.first_day_of_week);

        let total_count = source.count(&counter.name, None)?;
        let last_interval_count = match window_start {
            Some(start) => source.count(&counter.name, Some(start))?,
            None => total_count,
        };

        let summary = Self {
            name: counter.name.clone(),
            interval: counter.interval,
            goal: counter.goal,
            color: counter.color,
            last_interval_count,
            total_count,
            least_recent: source.least_recent(&counter.name)?.map(|e| e.timestamp),
            most_recent: source.most_recent(&counter.name)?.map(|e| e.timestamp),
        };

        tracing::debug!(
            counter = %summary.name,
            total = summary.total_count,
            last_interval = summary.last_interval_count,
            "Computed counter summary"
        );

        Ok(summary)
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Whether the current interval already meets the goal.
    pub fn goal_reached(&self) -> bool {
        self.goal > 0 && self.last_interval_count >= u64::from(self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AverageMode;
    use crate::store::MemoryStore;
    use crate::types::Entry;
    use chrono::{NaiveDate, Weekday};

    fn ts(m: u32, d: u32, h: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2025, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_many([
            Entry::new("run", ts(1, 10, 7)),
            Entry::new("run", ts(5, 12, 7)),
            Entry::new("run", ts(5, 13, 7)),
            Entry::new("run", ts(5, 14, 7)),
        ]);
        store
    }

    fn ctx() -> StatsContext {
        // Wednesday
        StatsContext::new(ts(5, 14, 20), Weekday::Mon, AverageMode::FirstToNow)
    }

    #[test]
    fn test_summary_aggregates() {
        let counter = Counter::new("run", Interval::Week).with_goal(3);
        let summary = CounterSummary::compute(&counter, &store(), &ctx()).unwrap();

        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.last_interval_count, 3);
        assert_eq!(summary.least_recent, Some(ts(1, 10, 7)));
        assert_eq!(summary.most_recent, Some(ts(5, 14, 7)));
        assert!(summary.goal_reached());
    }

    #[test]
    fn test_last_interval_follows_window() {
        let store = store();
        let day = CounterSummary::compute(&Counter::new("run", Interval::Day), &store, &ctx())
            .unwrap();
        assert_eq!(day.last_interval_count, 1);

        let ytd = CounterSummary::compute(&Counter::new("run", Interval::Ytd), &store, &ctx())
            .unwrap();
        assert_eq!(ytd.last_interval_count, 4);

        let lifetime =
            CounterSummary::compute(&Counter::new("run", Interval::Lifetime), &store, &ctx())
                .unwrap();
        assert_eq!(lifetime.last_interval_count, 4);
    }

    #[test]
    fn test_summary_of_unknown_counter_is_empty() {
        let counter = Counter::new("swim", Interval::Day).with_goal(1);
        let summary = CounterSummary::compute(&counter, &store(), &ctx()).unwrap();
        assert!(summary.is_empty());
        assert!(summary.least_recent.is_none());
        assert!(!summary.goal_reached());
    }
}

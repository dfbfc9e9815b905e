//! Statistics engine for tally
//!
//! Provides the aggregates counter charts are drawn from:
//! - Per-bucket counts for a chart page and the history-wide maximum
//! - Goal lines projected onto coarser display intervals
//! - Period and lifetime average rates
//! - Counter summaries and chart paging
//!
//! Every function is synchronous and pure over its explicit inputs. "Now",
//! the first day of the week and the averaging mode arrive through
//! [`StatsContext`](crate::context::StatsContext), never from global state.
//!
//! ## Data flow
//!
//! ```text
//! EntrySource ──► CounterSummary ──► ChartPager
//!      │                │
//!      ▼                ▼
//!  buckets ──► ChartPage ◄── goal, average
//! ```

pub mod average;
pub mod buckets;
pub mod chart;
pub mod goal;
pub mod pager;
pub mod summary;

pub use average::{lifetime_average, period_average, Rate, RateUnit};
pub use buckets::{compute_buckets_for_interval_entries, compute_max_count_for_all_entries};
pub use chart::{build_chart_page, max_count_for_counter, ChartPage};
pub use goal::project_goal;
pub use pager::ChartPager;
pub use summary::CounterSummary;

//! # tally-core
//!
//! Core library for tally - a personal counter and habit tracker.
//!
//! This library provides:
//! - Calendar truncation, stepping and inclusive unit counting
//! - The time-bucketed statistics engine behind counter charts
//! - Goal projection and average rates
//! - Configuration management
//! - Logging infrastructure
//!
//! Storage, rendering and import/export live outside this crate. Entries
//! arrive through the [`EntrySource`] trait as plain sorted lists.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use tally_core::analytics::{build_chart_page, max_count_for_counter, CounterSummary};
//! use tally_core::{AverageMode, Counter, Entry, Interval, MemoryStore, StatsContext};
//!
//! let at = |d, h| NaiveDate::from_ymd_opt(2025, 3, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
//!
//! let mut store = MemoryStore::new();
//! store.add(Entry::new("coffee", at(10, 8)));
//! store.add(Entry::new("coffee", at(10, 14)));
//!
//! let ctx = StatsContext::new(at(11, 9), Weekday::Mon, AverageMode::FirstToNow);
//! let counter = Counter::new("coffee", Interval::Day).with_goal(2);
//! let summary = CounterSummary::compute(&counter, &store, &ctx).unwrap();
//!
//! let max = max_count_for_counter(&store, &summary, Interval::Week, &ctx).unwrap();
//! let page = build_chart_page(&store, &summary, Interval::Week, at(10, 0), max, &ctx).unwrap();
//! assert_eq!(page.buckets[0], 2);
//! assert_eq!(page.goal_line, Some(2));
//! ```

// Re-export commonly used items at the crate root
pub use calendar::{CalendarField, Timestamp};
pub use config::Config;
pub use context::{AverageMode, StatsContext};
pub use error::{Error, Result};
pub use interval::Interval;
pub use store::{EntrySource, MemoryStore};
pub use types::*;

// Public modules
pub mod analytics;
pub mod calendar;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod interval;
pub mod logging;
pub mod store;
pub mod types;
pub mod units;

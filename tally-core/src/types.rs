//! Core domain types for tally
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Counter** | A named thing being tallied, tracked at one [`Interval`] |
//! | **Entry** | One timestamped tally for a counter |
//! | **Goal** | Target entry count per the counter's own interval (0 = none) |
//! | **Display interval** | Interval of the chart page being shown, may be coarser than the counter's |

use crate::calendar::Timestamp;
use crate::interval::Interval;
use serde::{Deserialize, Serialize};

// ============================================
// Entry
// ============================================

/// One timestamped tally. Ordered by `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Local wall-clock time of the tally
    pub timestamp: Timestamp,
    /// Counter this entry belongs to
    pub counter_name: String,
}

impl Entry {
    pub fn new(counter_name: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            counter_name: counter_name.into(),
        }
    }
}

// ============================================
// Counter
// ============================================

/// Counter metadata as configured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Unique name
    pub name: String,
    /// Interval the counter is tracked at
    pub interval: Interval,
    /// Target count per interval (0 = no goal)
    #[serde(default)]
    pub goal: u32,
    /// ARGB color used by charts
    #[serde(default = "default_color")]
    pub color: u32,
}

fn default_color() -> u32 {
    0xFF01_6E82
}

impl Counter {
    pub fn new(name: impl Into<String>, interval: Interval) -> Self {
        Self {
            name: name.into(),
            interval,
            goal: 0,
            color: default_color(),
        }
    }

    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn has_goal(&self) -> bool {
        self.goal > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_counter_builder() {
        let counter = Counter::new("coffee", Interval::Day).with_goal(3);
        assert_eq!(counter.name, "coffee");
        assert!(counter.has_goal());
        assert!(!Counter::new("tea", Interval::Week).has_goal());
    }

    #[test]
    fn test_entry_serializes_as_wall_clock() {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        let entry = Entry::new("coffee", ts);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "2025-06-01T07:30:00");
        assert_eq!(json["counter_name"], "coffee");
    }

    #[test]
    fn test_counter_defaults_when_deserializing() {
        let counter: Counter =
            serde_json::from_str(r#"{"name":"pushups","interval":"week"}"#).unwrap();
        assert_eq!(counter.interval, Interval::Week);
        assert_eq!(counter.goal, 0);
        assert_eq!(counter.color, default_color());
    }
}

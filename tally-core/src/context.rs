//! Explicit inputs for statistics computations
//!
//! "Now", the first day of the week and the averaging mode are the only
//! time-varying inputs of the engine. They travel as a [`StatsContext`] value;
//! [`StatsContext::from_system`] is the one place that reads the clock, the
//! locale and the configuration.

use crate::calendar::Timestamp;
use crate::config::Config;
use chrono::{Local, Weekday};
use serde::{Deserialize, Serialize};

/// How averages choose the end of their span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageMode {
    /// Span extends to now; the future holds no further entries.
    #[default]
    FirstToNow,
    /// Span stops at the last entry; counts intervals between entries.
    FirstToLast,
}

/// Snapshot of the external inputs a computation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsContext {
    pub now: Timestamp,
    pub first_day_of_week: Weekday,
    pub average_mode: AverageMode,
}

impl StatsContext {
    pub fn new(now: Timestamp, first_day_of_week: Weekday, average_mode: AverageMode) -> Self {
        Self {
            now,
            first_day_of_week,
            average_mode,
        }
    }

    /// Read the current wall clock, locale and configured settings.
    pub fn from_system(config: &Config) -> Self {
        let first_day_of_week = config
            .stats
            .first_day_of_week
            .unwrap_or_else(system_first_day_of_week);
        let ctx = Self {
            now: Local::now().naive_local(),
            first_day_of_week,
            average_mode: config.stats.average_mode,
        };
        tracing::debug!(
            now = %ctx.now,
            first_day = %ctx.first_day_of_week,
            mode = ?ctx.average_mode,
            "Built stats context"
        );
        ctx
    }

    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }
}

/// First day of week for the process locale (`LC_ALL`, `LC_TIME`, `LANG`).
pub fn system_first_day_of_week() -> Weekday {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(|locale| first_day_for_locale(&locale))
        .unwrap_or(Weekday::Mon)
}

/// First day of week for a POSIX or BCP 47 locale name such as `en_US.UTF-8`.
///
/// Locales without a region (`C`, `POSIX`, `de`) start on Monday.
pub fn first_day_for_locale(locale: &str) -> Weekday {
    let name = locale.split(['.', '@']).next().unwrap_or_default();
    let region = name
        .split(['_', '-'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|part| part.to_ascii_uppercase());

    match region.as_deref() {
        Some(
            "US" | "CA" | "MX" | "BR" | "JP" | "KR" | "TW" | "HK" | "MO" | "PH" | "IL" | "IN"
            | "ZA" | "AU" | "CO" | "PE" | "VE" | "GT" | "SV" | "HN" | "NI" | "PA" | "DO" | "PR"
            | "SA" | "TH" | "ID" | "KE" | "PK",
        ) => Weekday::Sun,
        Some(
            "AE" | "AF" | "BH" | "DZ" | "EG" | "IQ" | "IR" | "JO" | "KW" | "LY" | "OM" | "QA"
            | "SD" | "SY",
        ) => Weekday::Sat,
        _ => Weekday::Mon,
    }
}

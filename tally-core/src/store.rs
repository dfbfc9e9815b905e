//! Entry source seam
//!
//! The statistics engine never owns storage. It pulls sorted entry lists and
//! scalar aggregates through [`EntrySource`]; [`MemoryStore`] is the in-memory
//! implementation used by tests and embedders that keep entries themselves.

use crate::calendar::Timestamp;
use crate::error::Result;
use crate::types::Entry;
use std::collections::HashMap;

/// Queries the statistics engine consumes from storage.
///
/// Every list is sorted ascending by timestamp.
pub trait EntrySource {
    /// All entries of a counter.
    fn all_entries_sorted(&self, counter: &str) -> Result<Vec<Entry>>;

    /// Entries of a counter within `[start, end)`.
    fn entries_in_range_sorted(
        &self,
        counter: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Entry>>;

    /// Earliest entry of a counter.
    fn least_recent(&self, counter: &str) -> Result<Option<Entry>>;

    /// Latest entry of a counter.
    fn most_recent(&self, counter: &str) -> Result<Option<Entry>>;

    /// Number of entries of a counter, optionally only those at or after `since`.
    fn count(&self, counter: &str, since: Option<Timestamp>) -> Result<u64>;
}

/// In-memory entry storage keyed by counter name.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping its counter's list sorted.
    ///
    /// An entry with the same timestamp as existing ones lands after them.
    pub fn add(&mut self, entry: Entry) {
        let list = self.entries.entry(entry.counter_name.clone()).or_default();
        let at = list.partition_point(|e| e.timestamp <= entry.timestamp);
        list.insert(at, entry);
    }

    pub fn add_many(&mut self, entries: impl IntoIterator<Item = Entry>) {
        for entry in entries {
            self.add(entry);
        }
    }

    /// Drop the most recent entry of a counter, returning it.
    pub fn remove_last(&mut self, counter: &str) -> Option<Entry> {
        let list = self.entries.get_mut(counter)?;
        let removed = list.pop();
        if list.is_empty() {
            self.entries.remove(counter);
        }
        removed
    }

    /// Drop every entry of a counter, returning how many were removed.
    pub fn remove_counter(&mut self, counter: &str) -> usize {
        self.entries.remove(counter).map(|l| l.len()).unwrap_or(0)
    }

    /// Names of counters holding at least one entry, sorted.
    pub fn counter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    fn list(&self, counter: &str) -> &[Entry] {
        self.entries.get(counter).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl EntrySource for MemoryStore {
    fn all_entries_sorted(&self, counter: &str) -> Result<Vec<Entry>> {
        Ok(self.list(counter).to_vec())
    }

    fn entries_in_range_sorted(
        &self,
        counter: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Entry>> {
        let list = self.list(counter);
        let lo = list.partition_point(|e| e.timestamp < start);
        let hi = list.partition_point(|e| e.timestamp < end).max(lo);
        Ok(list[lo..hi].to_vec())
    }

    fn least_recent(&self, counter: &str) -> Result<Option<Entry>> {
        Ok(self.list(counter).first().cloned())
    }

    fn most_recent(&self, counter: &str) -> Result<Option<Entry>> {
        Ok(self.list(counter).last().cloned())
    }

    fn count(&self, counter: &str, since: Option<Timestamp>) -> Result<u64> {
        let list = self.list(counter);
        let skipped = match since {
            Some(since) => list.partition_point(|e| e.timestamp < since),
            None => 0,
        };
        Ok((list.len() - skipped) as u64)
    }
}

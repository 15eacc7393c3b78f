use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::day::DayEntry;

pub const DEFAULT_GOAL: i64 = 2000;

/// The whole persisted document: goal, streak counter and every day's log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Store {
    #[serde(default = "default_goal")]
    pub goal: i64,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub records: BTreeMap<NaiveDate, DayEntry>,
}

fn default_goal() -> i64 {
    DEFAULT_GOAL
}

impl Default for Store {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            streak: 0,
            records: BTreeMap::new(),
        }
    }
}

impl Store {
    pub fn day(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.records.get(&date)
    }

    /// Fetch the entry for `date`, creating an empty one on first use.
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut DayEntry {
        self.records.entry(date).or_default()
    }

    /// Calories logged on `date`; zero when nothing was logged.
    pub fn total_on(&self, date: NaiveDate) -> i64 {
        self.day(date).map(|d| d.total).unwrap_or(0)
    }
}

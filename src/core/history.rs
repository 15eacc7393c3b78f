use anyhow::Result;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::db::DataFile;
use crate::models::Store;

pub const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub total: i64,
}

/// Totals for the `days` calendar days ending at `today`, newest first.
/// Days with nothing logged are left out rather than shown as zero.
pub fn collect(store: &Store, today: NaiveDate, days: u32) -> Vec<HistoryRow> {
    if days == 0 {
        return Vec::new();
    }
    let start = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);
    store
        .records
        .range(start..=today)
        .rev()
        .map(|(date, entry)| HistoryRow {
            date: *date,
            total: entry.total,
        })
        .collect()
}

pub fn show_history(db: &DataFile, today: NaiveDate, days: u32) -> Result<Vec<HistoryRow>> {
    let store = db.load()?;
    Ok(collect(&store, today, days))
}

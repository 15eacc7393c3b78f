use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::db::DataFile;
use crate::models::Store;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusData {
    pub date: NaiveDate,
    pub total: i64,
    pub goal: i64,
    pub remaining: i64,
    pub goal_met: bool,
    pub streak: u32,
}

pub fn compute(store: &Store, date: NaiveDate) -> StatusData {
    let total = store.total_on(date);
    StatusData {
        date,
        total,
        goal: store.goal,
        remaining: store.goal.saturating_sub(total).max(0),
        goal_met: total >= store.goal,
        streak: store.streak,
    }
}

/// Progress for `date` against the goal. Read-only.
pub fn show_status(db: &DataFile, date: NaiveDate) -> Result<StatusData> {
    let store = db.load()?;
    Ok(compute(&store, date))
}

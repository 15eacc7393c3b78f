use anyhow::Result;
use chrono::NaiveDate;

use crate::db::DataFile;
use crate::models::DayEntry;

/// The items logged on `date`, if any.
pub fn show_day(db: &DataFile, date: NaiveDate) -> Result<Option<DayEntry>> {
    let mut store = db.load()?;
    Ok(store.records.remove(&date))
}

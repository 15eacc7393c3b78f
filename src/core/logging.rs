use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::db::DataFile;
use crate::error::TotalOverflow;
use crate::models::{FoodItem, Store};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoggedItem {
    pub date: NaiveDate,
    pub food: String,
    pub calories: i64,
    /// Day total after this item.
    pub total: i64,
}

/// Append a food item to `date`'s entry in an in-memory store.
pub fn add_item(
    store: &mut Store,
    date: NaiveDate,
    food: &str,
    calories: i64,
) -> Result<LoggedItem, TotalOverflow> {
    let total = store.day_mut(date).add(FoodItem::new(food, calories))?;
    debug!(%date, food, calories, total, "logged item");
    Ok(LoggedItem {
        date,
        food: food.to_string(),
        calories,
        total,
    })
}

/// Log a food item for `date` and persist it.
pub fn log_item(db: &DataFile, food: &str, calories: i64, date: NaiveDate) -> Result<LoggedItem> {
    db.update(|store| Ok(add_item(store, date, food, calories)?))
}

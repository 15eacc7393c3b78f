use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use calorie_tracker::core::logging::log_item;
use calorie_tracker::db::DataFile;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(
    db: &DataFile,
    food: &str,
    calories: i64,
    date: NaiveDate,
    json_flag: bool,
) -> Result<()> {
    let item = log_item(db, food, calories, date)?;

    if json_flag {
        output::print_success("log", json!({ "entry": item }))?;
    } else {
        println!("{}", human::format_logged(&item));
    }
    Ok(())
}

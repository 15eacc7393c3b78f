use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use calorie_tracker::core::history::show_history;
use calorie_tracker::db::DataFile;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(db: &DataFile, today: NaiveDate, days: u32, json_flag: bool) -> Result<()> {
    let rows = show_history(db, today, days)?;

    if json_flag {
        output::print_success("history", json!({ "days": days, "entries": rows }))?;
    } else {
        println!("{}", human::format_history(&rows, days));
    }
    Ok(())
}

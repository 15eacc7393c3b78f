use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use calorie_tracker::core::query::show_day;
use calorie_tracker::db::DataFile;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(db: &DataFile, date: NaiveDate, json_flag: bool) -> Result<()> {
    let entry = show_day(db, date)?;

    if json_flag {
        output::print_success("show", json!({ "date": date.to_string(), "entry": entry }))?;
        return Ok(());
    }

    match entry {
        Some(e) => {
            println!("--- {} ---", date);
            println!("{}", human::format_day(&e));
        }
        None => println!("Nothing logged for {}", date),
    }
    Ok(())
}

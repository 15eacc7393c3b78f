use anyhow::Result;
use chrono::NaiveDate;

use calorie_tracker::core::status::show_status;
use calorie_tracker::db::DataFile;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(db: &DataFile, date: NaiveDate, json_flag: bool) -> Result<()> {
    let status = show_status(db, date)?;

    if json_flag {
        output::print_success("status", &status)?;
    } else {
        println!("{}", human::format_status(&status));
    }
    Ok(())
}

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;

use calorie_tracker::core::streak::{DayOutcome, end_day};
use calorie_tracker::db::DataFile;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(db: &DataFile, date: NaiveDate, json_flag: bool) -> Result<()> {
    let outcome = end_day(db, date)?;

    if json_flag {
        output::print_success("end", &outcome)?;
        return Ok(());
    }

    let met = matches!(outcome, DayOutcome::GoalMet { .. });
    for (i, line) in human::end_day_lines(&outcome).iter().enumerate() {
        let styled = match (met, i) {
            (true, 0) => line.green(),
            (true, _) => line.yellow().bold(),
            (false, 0) => line.red(),
            (false, _) => line.normal(),
        };
        println!("{}", styled);
    }
    Ok(())
}

use anyhow::Result;
use serde_json::json;

use calorie_tracker::core::goal::set_goal;
use calorie_tracker::db::DataFile;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(db: &DataFile, amount: i64, json_flag: bool) -> Result<()> {
    let change = set_goal(db, amount)?;

    if json_flag {
        output::print_success("setgoal", json!({ "goal": change }))?;
    } else {
        println!("{}", human::format_goal(&change));
    }
    Ok(())
}

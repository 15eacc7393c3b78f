use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use crate::core::goal::GoalChange;
use crate::core::history::HistoryRow;
use crate::core::logging::LoggedItem;
use crate::core::status::StatusData;
use crate::core::streak::DayOutcome;
use crate::models::DayEntry;

pub fn format_logged(item: &LoggedItem) -> String {
    format!(
        "Logged {} ({} calories) for {}. Total: {}",
        item.food, item.calories, item.date, item.total
    )
}

/// Two lines: progress against the goal, then the streak.
pub fn format_status(s: &StatusData) -> String {
    format!(
        "Today: {}/{} calories\nCurrent streak: {} day(s)",
        s.total, s.goal, s.streak
    )
}

pub fn format_goal(change: &GoalChange) -> String {
    format!("New daily goal set to {} calories.", change.goal)
}

pub fn format_goal_met(total: i64) -> String {
    format!("Congrats! You hit your goal with {} calories.", total)
}

pub fn format_bonus(streak: u32) -> String {
    format!("Streak is {}! You earned $20.", streak)
}

pub fn format_goal_missed(total: i64, goal: i64) -> String {
    format!(
        "You only logged {} calories, under the goal of {}.",
        total, goal
    )
}

pub const STREAK_RESET: &str = "Streak reset.";

/// Plain-text lines for an end-of-day outcome, in print order.
pub fn end_day_lines(outcome: &DayOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    match outcome {
        DayOutcome::GoalMet {
            total,
            streak,
            bonus,
            ..
        } => {
            lines.push(format_goal_met(*total));
            if *bonus {
                lines.push(format_bonus(*streak));
            }
        }
        DayOutcome::GoalMissed { total, goal, .. } => {
            lines.push(format_goal_missed(*total, *goal));
            if outcome.was_reset() {
                lines.push(STREAK_RESET.to_string());
            }
        }
    }
    lines
}

pub fn format_history_row(row: &HistoryRow) -> String {
    format!("{}: {} calories", row.date, row.total)
}

pub fn format_history(rows: &[HistoryRow], days: u32) -> String {
    if rows.is_empty() {
        return format!("No calories logged in the last {} day(s).", days);
    }
    rows.iter()
        .map(format_history_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Table of one day's items with the total as the last row.
pub fn format_day(entry: &DayEntry) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Food", "Calories"]);
    for (i, item) in entry.items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&item.food),
            Cell::new(item.calories).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Total"),
        Cell::new(entry.total).set_alignment(CellAlignment::Right),
    ]);
    table.to_string()
}

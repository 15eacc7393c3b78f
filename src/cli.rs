use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use calorie_tracker::core::history::DEFAULT_DAYS;

#[derive(Parser)]
#[command(
    name = "calorie-tracker",
    version,
    about = "Simple calorie tracker with daily goals and streaks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as a JSON envelope instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Act on this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a food item for today
    Log {
        /// What was eaten
        food: String,

        /// Calories to add
        #[arg(allow_negative_numbers = true)]
        calories: i64,
    },

    /// Show today's progress
    Status,

    /// Finalize today and update streak
    End,

    /// Set new calorie goal
    #[command(name = "setgoal")]
    SetGoal {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Show daily totals for recent days
    History {
        /// Number of days to look back, today included
        #[arg(long, default_value_t = DEFAULT_DAYS)]
        days: u32,
    },

    /// List the items logged today
    Show,

    /// Generate shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

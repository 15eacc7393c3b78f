use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::db::DataFile;
use crate::models::Store;

/// Streak length at which the reward message is shown.
pub const BONUS_STREAK: u32 = 3;

/// Result of closing out a day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DayOutcome {
    GoalMet {
        date: NaiveDate,
        total: i64,
        goal: i64,
        streak: u32,
        bonus: bool,
    },
    GoalMissed {
        date: NaiveDate,
        total: i64,
        goal: i64,
        /// Streak before it was cleared.
        previous_streak: u32,
    },
}

impl DayOutcome {
    pub fn streak(&self) -> u32 {
        match self {
            Self::GoalMet { streak, .. } => *streak,
            Self::GoalMissed { .. } => 0,
        }
    }

    /// Whether a non-zero streak was wiped out.
    pub fn was_reset(&self) -> bool {
        matches!(self, Self::GoalMissed { previous_streak, .. } if *previous_streak != 0)
    }
}

/// Compare `date`'s total against the goal and advance or clear the streak.
///
/// Not guarded against repeat calls: ending the same day twice counts it twice.
pub fn close_day(store: &mut Store, date: NaiveDate) -> DayOutcome {
    let total = store.total_on(date);
    let goal = store.goal;

    let outcome = if total >= goal {
        store.streak = store.streak.saturating_add(1);
        DayOutcome::GoalMet {
            date,
            total,
            goal,
            streak: store.streak,
            bonus: store.streak >= BONUS_STREAK,
        }
    } else {
        let previous_streak = store.streak;
        store.streak = 0;
        DayOutcome::GoalMissed {
            date,
            total,
            goal,
            previous_streak,
        }
    };
    debug!(%date, total, goal, streak = store.streak, "closed day");
    outcome
}

/// Run the end-of-day streak update for `date` and persist it.
pub fn end_day(db: &DataFile, date: NaiveDate) -> Result<DayOutcome> {
    db.update(|store| Ok(close_day(store, date)))
}

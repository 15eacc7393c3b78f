use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::db::DataFile;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GoalChange {
    pub previous: i64,
    pub goal: i64,
}

/// Replace the daily goal. Any integer is accepted, including zero and negatives.
pub fn set_goal(db: &DataFile, amount: i64) -> Result<GoalChange> {
    db.update(|store| {
        let previous = std::mem::replace(&mut store.goal, amount);
        debug!(previous, goal = amount, "goal changed");
        Ok(GoalChange {
            previous,
            goal: amount,
        })
    })
}

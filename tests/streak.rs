mod common;

use calorie_tracker::core::logging::log_item;
use calorie_tracker::core::streak::{DayOutcome, close_day, end_day};
use calorie_tracker::models::{FoodItem, Store};
use common::date;

fn store_with(goal: i64, streak: u32, total: i64) -> Store {
    let mut store = Store {
        goal,
        streak,
        ..Store::default()
    };
    if total != 0 {
        store
            .day_mut(date("2024-01-01"))
            .add(FoodItem::new("food", total))
            .unwrap();
    }
    store
}

#[test]
fn test_first_goal_met_no_bonus() {
    let (_dir, db) = common::setup_store();
    let d = date("2024-01-01");
    log_item(&db, "feast", 2500, d).unwrap();

    let outcome = end_day(&db, d).unwrap();
    assert_eq!(
        outcome,
        DayOutcome::GoalMet {
            date: d,
            total: 2500,
            goal: 2000,
            streak: 1,
            bonus: false,
        }
    );
    assert_eq!(db.load().unwrap().streak, 1);
}

#[test]
fn test_third_day_earns_bonus() {
    let mut store = store_with(2000, 2, 2500);
    let outcome = close_day(&mut store, date("2024-01-01"));

    assert_eq!(store.streak, 3);
    assert!(matches!(
        outcome,
        DayOutcome::GoalMet {
            streak: 3,
            bonus: true,
            ..
        }
    ));
}

#[test]
fn test_bonus_repeats_while_streak_holds() {
    let mut store = store_with(2000, 5, 2000);
    let outcome = close_day(&mut store, date("2024-01-01"));
    assert_eq!(outcome.streak(), 6);
    assert!(matches!(outcome, DayOutcome::GoalMet { bonus: true, .. }));
}

#[test]
fn test_exactly_goal_counts_as_met() {
    let mut store = store_with(2000, 0, 2000);
    let outcome = close_day(&mut store, date("2024-01-01"));
    assert!(matches!(outcome, DayOutcome::GoalMet { streak: 1, .. }));
}

#[test]
fn test_missed_goal_resets_streak() {
    let (_dir, db) = common::setup_store();
    let d = date("2024-01-01");
    db.update(|s| {
        s.streak = 2;
        Ok(())
    })
    .unwrap();
    log_item(&db, "snack", 1000, d).unwrap();

    let outcome = end_day(&db, d).unwrap();
    assert_eq!(
        outcome,
        DayOutcome::GoalMissed {
            date: d,
            total: 1000,
            goal: 2000,
            previous_streak: 2,
        }
    );
    assert!(outcome.was_reset());
    assert_eq!(db.load().unwrap().streak, 0);
}

#[test]
fn test_missed_goal_with_zero_streak_is_not_a_reset() {
    let mut store = store_with(2000, 0, 500);
    let outcome = close_day(&mut store, date("2024-01-01"));
    assert_eq!(store.streak, 0);
    assert!(!outcome.was_reset());
}

#[test]
fn test_day_without_entry_counts_as_zero() {
    let mut store = store_with(2000, 7, 0);
    let outcome = close_day(&mut store, date("2024-01-01"));
    assert!(matches!(outcome, DayOutcome::GoalMissed { total: 0, .. }));
    assert_eq!(store.streak, 0);
    // Ending a day does not create an entry for it
    assert!(store.records.is_empty());
}

#[test]
fn test_zero_goal_met_by_empty_day() {
    let mut store = store_with(0, 0, 0);
    let outcome = close_day(&mut store, date("2024-01-01"));
    assert!(matches!(outcome, DayOutcome::GoalMet { total: 0, .. }));
}

#[test]
fn test_ending_same_day_twice_counts_twice() {
    let (_dir, db) = common::setup_store();
    let d = date("2024-01-01");
    log_item(&db, "feast", 2500, d).unwrap();

    end_day(&db, d).unwrap();
    let second = end_day(&db, d).unwrap();

    assert_eq!(second.streak(), 2);
    assert_eq!(db.load().unwrap().streak, 2);
}

#[test]
fn test_met_increments_by_one_and_missed_zeroes_for_any_prior() {
    for prior in [0u32, 1, 2, 3, 10, 365] {
        let mut met = store_with(2000, prior, 2100);
        close_day(&mut met, date("2024-01-01"));
        assert_eq!(met.streak, prior + 1);

        let mut missed = store_with(2000, prior, 1999);
        close_day(&mut missed, date("2024-01-01"));
        assert_eq!(missed.streak, 0);
    }
}

#[test]
fn test_outcome_json_is_tagged() {
    let mut store = store_with(2000, 0, 2500);
    let outcome = close_day(&mut store, date("2024-01-01"));
    let v = serde_json::to_value(&outcome).unwrap();
    assert_eq!(v["outcome"], "goal_met");
    assert_eq!(v["streak"], 1);
    assert_eq!(v["date"], "2024-01-01");
}

#[test]
fn test_streak_saturates_instead_of_wrapping() {
    let mut store = store_with(2000, u32::MAX, 2500);
    let outcome = close_day(&mut store, date("2024-01-01"));
    assert_eq!(store.streak, u32::MAX);
    assert_eq!(outcome.streak(), u32::MAX);
}

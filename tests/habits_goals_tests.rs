// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use lifehub::db;
use lifehub::models::GoalStep;
use lifehub::stats::{goal_progress, habit_rate, habit_streak};
use lifehub::store;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn streak_counts_consecutive_days() {
    let today = date(2024, 6, 10);
    let dates = vec![date(2024, 6, 8), date(2024, 6, 9), date(2024, 6, 10)];
    assert_eq!(habit_streak(&dates, today), 3);
}

#[test]
fn streak_survives_missing_today() {
    // Checked through yesterday; today not yet checked
    let today = date(2024, 6, 10);
    let dates = vec![date(2024, 6, 7), date(2024, 6, 8), date(2024, 6, 9)];
    assert_eq!(habit_streak(&dates, today), 3);
}

#[test]
fn streak_resets_on_gap() {
    let today = date(2024, 6, 10);
    let dates = vec![date(2024, 6, 5), date(2024, 6, 6), date(2024, 6, 10)];
    assert_eq!(habit_streak(&dates, today), 1);
    assert_eq!(habit_streak(&[], today), 0);
    assert_eq!(habit_streak(&[date(2024, 6, 1)], today), 0);
}

#[test]
fn rate_over_window() {
    let today = date(2024, 6, 30);
    let dates: Vec<NaiveDate> = (1..=15).map(|d| date(2024, 6, d)).collect();
    // 15 of the last 30 days
    assert_eq!(habit_rate(&dates, today, 30), 50);
    assert_eq!(habit_rate(&dates, today, 0), 0);
}

#[test]
fn duplicate_check_same_day_is_ignored() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_habit(&conn, "meditate", date(2024, 6, 1)).unwrap();
    assert!(store::check_habit(&conn, id, date(2024, 6, 2)).unwrap());
    assert!(!store::check_habit(&conn, id, date(2024, 6, 2)).unwrap());
    assert_eq!(store::habit_check_dates(&conn, id).unwrap().len(), 1);
}

#[test]
fn removing_a_habit_drops_its_checks() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_habit(&conn, "run", date(2024, 6, 1)).unwrap();
    store::check_habit(&conn, id, date(2024, 6, 2)).unwrap();
    store::delete_habit(&conn, "run").unwrap();
    assert!(store::habit_check_dates(&conn, id).unwrap().is_empty());
}

fn step(done: bool) -> GoalStep {
    GoalStep {
        id: 0,
        goal_id: 0,
        title: "s".into(),
        done,
    }
}

#[test]
fn progress_rolls_up_done_over_total() {
    assert_eq!(goal_progress(&[]), 0);
    assert_eq!(goal_progress(&[step(false)]), 0);
    assert_eq!(goal_progress(&[step(true), step(false)]), 50);
    assert_eq!(goal_progress(&[step(true), step(true), step(false)]), 66);
    assert_eq!(goal_progress(&[step(true)]), 100);
}

#[test]
fn goal_steps_through_the_store() {
    let conn = db::open_in_memory().unwrap();
    let gid = store::add_goal(&conn, "Learn Rust", Some(date(2024, 12, 31))).unwrap();
    let s1 = store::add_goal_step(&conn, gid, "Read the book").unwrap();
    store::add_goal_step(&conn, gid, "Ship a crate").unwrap();

    store::set_step_done(&conn, s1, true).unwrap();
    let steps = store::goal_steps(&conn, gid).unwrap();
    assert_eq!(goal_progress(&steps), 50);

    // Steps cannot attach to a goal that does not exist
    assert!(store::add_goal_step(&conn, 999, "nope").is_err());

    store::delete_goal(&conn, gid).unwrap();
    assert!(store::goal_steps(&conn, gid).unwrap().is_empty());
}

// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure roll-ups over snapshots: goal progress and habit streaks.

use chrono::{Duration, NaiveDate};

use crate::models::GoalStep;

/// Done steps over total steps, as a whole percentage. A goal with no
/// steps reads as 0%.
pub fn goal_progress(steps: &[GoalStep]) -> u32 {
    if steps.is_empty() {
        return 0;
    }
    let done = steps.iter().filter(|s| s.done).count();
    (done * 100 / steps.len()) as u32
}

/// Consecutive checked days ending today or yesterday. `dates` must be
/// sorted ascending and unique (the store guarantees both).
pub fn habit_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak = 0u32;
    let mut cursor = today;
    let mut iter = dates.iter().rev().peekable();
    // A streak not yet checked today still counts from yesterday.
    if iter.peek() != Some(&&today) {
        cursor = today - Duration::days(1);
    }
    for d in iter {
        if *d == cursor {
            streak += 1;
            cursor = cursor - Duration::days(1);
        } else if *d < cursor {
            break;
        }
    }
    streak
}

/// Fraction of the last `days` days with a check, as a whole percentage.
pub fn habit_rate(dates: &[NaiveDate], today: NaiveDate, days: u32) -> u32 {
    if days == 0 {
        return 0;
    }
    let from = today - Duration::days(days as i64 - 1);
    let checked = dates.iter().filter(|d| **d >= from && **d <= today).count() as u32;
    checked * 100 / days
}

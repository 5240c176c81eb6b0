// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// First/last calendar day of one month. Derived on demand from a
/// (year, month) pair; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    pub fn of(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            start,
            end: last_day_of(year, month)?,
        })
    }

    /// Window of the month containing `date`. Total over valid dates.
    pub fn containing(date: NaiveDate) -> Self {
        // from_ymd_opt cannot fail for a (y, m) taken from a valid date
        let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .unwrap_or(date);
        let end = last_day_of(date.year(), date.month()).unwrap_or(date);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days_in_month(&self) -> u32 {
        self.end.day()
    }

    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.start.year(), self.start.month())
    }

    pub fn pred(&self) -> Self {
        MonthWindow::containing(self.start - Duration::days(1))
    }

    /// The `n` windows ending at `self`, oldest first. Empty for n == 0.
    pub fn trailing(&self, n: usize) -> Vec<Self> {
        let mut out = Vec::with_capacity(n);
        let mut w = *self;
        for _ in 0..n {
            out.push(w);
            w = w.pred();
        }
        out.reverse();
        out
    }
}

fn last_day_of(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    Some(NaiveDate::from_ymd_opt(ny, nm, 1)? - Duration::days(1))
}

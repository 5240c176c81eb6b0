// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::finance::window::MonthWindow;
use crate::models::{Expense, Frequency, Income};

/// Anything with an amount, an anchor date, and a recurrence rule.
/// Both income and expense entries project through the same function.
pub trait Recurring {
    fn amount(&self) -> Decimal;
    fn effective_date(&self) -> NaiveDate;
    fn frequency(&self) -> Frequency;
}

impl Recurring for Income {
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }
    fn frequency(&self) -> Frequency {
        self.frequency
    }
}

impl Recurring for Expense {
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }
    fn frequency(&self) -> Frequency {
        self.frequency
    }
}

/// How much of `entry` counts toward the month bounded by `window`.
/// Total function: every valid entry/window pair produces a value.
pub fn projected_amount<R: Recurring + ?Sized>(entry: &R, window: &MonthWindow) -> Decimal {
    let anchor = entry.effective_date();
    // Not started yet: excluded regardless of frequency. The check runs
    // before the frequency switch, always.
    if anchor > window.end {
        return Decimal::ZERO;
    }
    match entry.frequency() {
        Frequency::OneTime => {
            if window.contains(anchor) {
                entry.amount()
            } else {
                Decimal::ZERO
            }
        }
        Frequency::Daily => entry.amount() * Decimal::from(window.days_in_month()),
        Frequency::Monthly => entry.amount(),
        Frequency::Yearly => {
            if anchor.month() == window.start.month() {
                entry.amount()
            } else {
                Decimal::ZERO
            }
        }
    }
}

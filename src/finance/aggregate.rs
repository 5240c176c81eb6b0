// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::finance::projection::projected_amount;
use crate::finance::window::MonthWindow;
use crate::models::{Expense, ExpenseCategory, Income};

#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net: Decimal,
}

/// Income and expenses summed independently; net = income - expenses.
/// Single implicit currency, no rounding here.
pub fn monthly_net(
    incomes: &[Income],
    expenses: &[Expense],
    window: &MonthWindow,
) -> MonthlySummary {
    let total_income: Decimal = incomes.iter().map(|e| projected_amount(e, window)).sum();
    let total_expenses: Decimal = expenses.iter().map(|e| projected_amount(e, window)).sum();
    MonthlySummary {
        total_income,
        total_expenses,
        net: total_income - total_expenses,
    }
}

/// Per-category expense totals for one month, descending by total.
/// Categories that project to zero are omitted entirely. Ties keep
/// first-seen input order (stable sort).
pub fn by_category(expenses: &[Expense], window: &MonthWindow) -> Vec<(ExpenseCategory, Decimal)> {
    let mut totals: Vec<(ExpenseCategory, Decimal)> = Vec::new();
    for e in expenses {
        let amt = projected_amount(e, window);
        if amt.is_zero() {
            continue;
        }
        match totals.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, t)) => *t += amt,
            None => totals.push((e.category, amt)),
        }
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub total: Decimal,
}

/// Expense totals for each of the `months_back` months ending at
/// `anchor`, oldest first. `months_back == 0` yields an empty sequence.
pub fn trailing_trend(
    expenses: &[Expense],
    months_back: usize,
    anchor: &MonthWindow,
) -> Vec<TrendPoint> {
    anchor
        .trailing(months_back)
        .into_iter()
        .map(|w| TrendPoint {
            label: w.label(),
            total: expenses.iter().map(|e| projected_amount(e, &w)).sum(),
        })
        .collect()
}

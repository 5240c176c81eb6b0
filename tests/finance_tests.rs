// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use lifehub::finance::{by_category, monthly_net, projected_amount, trailing_trend, MonthWindow};
use lifehub::models::{Expense, ExpenseCategory, Frequency, Income};
use rust_decimal::Decimal;

fn win(y: i32, m: u32) -> MonthWindow {
    MonthWindow::of(y, m).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn income(amount: i64, effective: NaiveDate, frequency: Frequency) -> Income {
    Income {
        id: 0,
        source: "test".into(),
        amount: Decimal::from(amount),
        effective_date: effective,
        frequency,
        note: None,
    }
}

fn expense(
    amount: i64,
    effective: NaiveDate,
    frequency: Frequency,
    category: ExpenseCategory,
) -> Expense {
    Expense {
        id: 0,
        name: "test".into(),
        amount: Decimal::from(amount),
        effective_date: effective,
        frequency,
        category,
        note: None,
    }
}

#[test]
fn month_window_bounds_and_days() {
    let w = win(2024, 2);
    assert_eq!(w.start, date(2024, 2, 1));
    assert_eq!(w.end, date(2024, 2, 29));
    assert_eq!(w.days_in_month(), 29);
    assert_eq!(win(2023, 2).days_in_month(), 28);
    assert_eq!(win(2024, 12).end, date(2024, 12, 31));
    assert_eq!(win(2024, 1).label(), "2024-01");
}

#[test]
fn one_time_income_counts_in_exactly_its_month() {
    // Scenario A
    let inc = income(5000, date(2024, 3, 10), Frequency::OneTime);
    let march = monthly_net(&[inc.clone()], &[], &win(2024, 3));
    assert_eq!(march.total_income, Decimal::from(5000));
    let april = monthly_net(&[inc.clone()], &[], &win(2024, 4));
    assert_eq!(april.total_income, Decimal::ZERO);

    // Zero for every other month of a two-year span
    for y in 2023..=2025 {
        for m in 1..=12 {
            let expected = if (y, m) == (2024, 3) {
                Decimal::from(5000)
            } else {
                Decimal::ZERO
            };
            assert_eq!(projected_amount(&inc, &win(y, m)), expected, "{}-{}", y, m);
        }
    }
}

#[test]
fn monthly_entry_recurs_forever_once_started() {
    let e = expense(
        200,
        date(2024, 1, 1),
        Frequency::Monthly,
        ExpenseCategory::Subscription,
    );
    assert_eq!(projected_amount(&e, &win(2023, 12)), Decimal::ZERO);
    assert_eq!(projected_amount(&e, &win(2024, 1)), Decimal::from(200));
    assert_eq!(projected_amount(&e, &win(2024, 6)), Decimal::from(200));
    assert_eq!(projected_amount(&e, &win(2031, 11)), Decimal::from(200));
}

#[test]
fn monthly_entry_starting_mid_month_counts_that_month() {
    // effective_date <= window.end is enough to have started
    let e = expense(
        50,
        date(2024, 5, 20),
        Frequency::Monthly,
        ExpenseCategory::Utilities,
    );
    assert_eq!(projected_amount(&e, &win(2024, 5)), Decimal::from(50));
    assert_eq!(projected_amount(&e, &win(2024, 4)), Decimal::ZERO);
}

#[test]
fn daily_entry_scales_with_days_in_month() {
    // Scenario C
    let e = expense(
        10,
        date(2024, 2, 1),
        Frequency::Daily,
        ExpenseCategory::Groceries,
    );
    assert_eq!(projected_amount(&e, &win(2024, 2)), Decimal::from(290));
    assert_eq!(projected_amount(&e, &win(2024, 4)), Decimal::from(300));
    assert_eq!(projected_amount(&e, &win(2024, 1)), Decimal::ZERO);
}

#[test]
fn yearly_entry_recurs_on_its_calendar_month() {
    // Scenario D
    let e = expense(
        1200,
        date(2023, 7, 15),
        Frequency::Yearly,
        ExpenseCategory::Other,
    );
    assert_eq!(projected_amount(&e, &win(2025, 7)), Decimal::from(1200));
    assert_eq!(projected_amount(&e, &win(2024, 7)), Decimal::from(1200));
    assert_eq!(projected_amount(&e, &win(2024, 8)), Decimal::ZERO);
    // Not started yet
    assert_eq!(projected_amount(&e, &win(2022, 7)), Decimal::ZERO);
    // Start month itself counts
    assert_eq!(projected_amount(&e, &win(2023, 7)), Decimal::from(1200));
}

#[test]
fn future_entries_are_excluded_regardless_of_frequency() {
    let w = win(2024, 3);
    for f in [
        Frequency::OneTime,
        Frequency::Daily,
        Frequency::Monthly,
        Frequency::Yearly,
    ] {
        let e = expense(99, date(2024, 4, 1), f, ExpenseCategory::Shopping);
        assert_eq!(projected_amount(&e, &w), Decimal::ZERO);
    }
    // effective_date == window.end has started
    let e = expense(
        7,
        date(2024, 3, 31),
        Frequency::Monthly,
        ExpenseCategory::Shopping,
    );
    assert_eq!(projected_amount(&e, &w), Decimal::from(7));
}

#[test]
fn monthly_net_sums_and_subtracts() {
    let incomes = vec![
        income(5000, date(2024, 1, 5), Frequency::Monthly),
        income(300, date(2024, 3, 2), Frequency::OneTime),
    ];
    let expenses = vec![
        expense(
            200,
            date(2024, 1, 1),
            Frequency::Monthly,
            ExpenseCategory::Subscription,
        ),
        expense(
            10,
            date(2024, 1, 1),
            Frequency::Daily,
            ExpenseCategory::Groceries,
        ),
    ];
    let s = monthly_net(&incomes, &expenses, &win(2024, 3));
    assert_eq!(s.total_income, Decimal::from(5300));
    // 200 + 10 * 31 days
    assert_eq!(s.total_expenses, Decimal::from(510));
    assert_eq!(s.net, Decimal::from(4790));
}

#[test]
fn monthly_net_is_linear_over_disjoint_collections() {
    let w = win(2024, 6);
    let inc_a = vec![income(1000, date(2024, 1, 1), Frequency::Monthly)];
    let inc_b = vec![income(250, date(2024, 6, 15), Frequency::OneTime)];
    let exp_a = vec![expense(
        40,
        date(2023, 6, 1),
        Frequency::Yearly,
        ExpenseCategory::Travel,
    )];
    let exp_b = vec![expense(
        5,
        date(2024, 2, 1),
        Frequency::Daily,
        ExpenseCategory::Dining,
    )];

    let separate_income = monthly_net(&inc_a, &exp_a, &w).total_income
        + monthly_net(&inc_b, &exp_b, &w).total_income;
    let separate_expenses = monthly_net(&inc_a, &exp_a, &w).total_expenses
        + monthly_net(&inc_b, &exp_b, &w).total_expenses;

    let mut incomes = inc_a;
    incomes.extend(inc_b);
    let mut expenses = exp_a;
    expenses.extend(exp_b);
    let union = monthly_net(&incomes, &expenses, &w);

    assert_eq!(union.total_income, separate_income);
    assert_eq!(union.total_expenses, separate_expenses);
    assert_eq!(union.net, separate_income - separate_expenses);
}

#[test]
fn by_category_groups_subscription_netflix() {
    // Scenario B
    let expenses = vec![expense(
        200,
        date(2024, 1, 1),
        Frequency::Monthly,
        ExpenseCategory::Subscription,
    )];
    let totals = by_category(&expenses, &win(2024, 6));
    assert_eq!(totals.len(), 1);
    assert_eq!(
        totals[0],
        (ExpenseCategory::Subscription, Decimal::from(200))
    );
}

#[test]
fn by_category_omits_zero_totals_and_sorts_descending() {
    let expenses = vec![
        expense(
            30,
            date(2024, 1, 1),
            Frequency::Monthly,
            ExpenseCategory::Utilities,
        ),
        // Not yet started in the queried month; must be absent, not zero
        expense(
            500,
            date(2024, 9, 1),
            Frequency::Monthly,
            ExpenseCategory::Travel,
        ),
        expense(
            80,
            date(2024, 2, 1),
            Frequency::Monthly,
            ExpenseCategory::Groceries,
        ),
        expense(
            20,
            date(2024, 3, 3),
            Frequency::OneTime,
            ExpenseCategory::Groceries,
        ),
    ];
    let totals = by_category(&expenses, &win(2024, 3));
    let cats: Vec<_> = totals.iter().map(|(c, _)| *c).collect();
    assert_eq!(cats, vec![ExpenseCategory::Groceries, ExpenseCategory::Utilities]);
    assert_eq!(totals[0].1, Decimal::from(100));
    assert!(!cats.contains(&ExpenseCategory::Travel));
}

#[test]
fn by_category_ties_keep_input_order() {
    let expenses = vec![
        expense(
            25,
            date(2024, 1, 1),
            Frequency::Monthly,
            ExpenseCategory::Dining,
        ),
        expense(
            25,
            date(2024, 1, 1),
            Frequency::Monthly,
            ExpenseCategory::Transport,
        ),
    ];
    let totals = by_category(&expenses, &win(2024, 2));
    assert_eq!(totals[0].0, ExpenseCategory::Dining);
    assert_eq!(totals[1].0, ExpenseCategory::Transport);
}

#[test]
fn trailing_trend_is_oldest_first_with_exact_length() {
    // Scenario E
    let expenses = vec![expense(
        100,
        date(2024, 1, 1),
        Frequency::Monthly,
        ExpenseCategory::Other,
    )];
    let points = trailing_trend(&expenses, 3, &win(2024, 6));
    let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["2024-04", "2024-05", "2024-06"]);
    for p in &points {
        assert_eq!(p.total, Decimal::from(100));
    }
}

#[test]
fn trailing_trend_crosses_year_boundaries() {
    let points = trailing_trend(&[], 4, &win(2024, 2));
    let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
}

#[test]
fn trailing_trend_zero_months_is_empty() {
    assert!(trailing_trend(&[], 0, &win(2024, 6)).is_empty());
}

#[test]
fn trend_counts_expenses_only_by_construction() {
    let expenses = vec![expense(
        10,
        date(2024, 4, 1),
        Frequency::Daily,
        ExpenseCategory::Groceries,
    )];
    let points = trailing_trend(&expenses, 2, &win(2024, 5));
    assert_eq!(points[0].total, Decimal::from(300)); // April, 30 days
    assert_eq!(points[1].total, Decimal::from(310)); // May, 31 days
}

#[test]
fn fractional_amounts_stay_exact() {
    let mut e = expense(
        0,
        date(2024, 2, 1),
        Frequency::Daily,
        ExpenseCategory::Groceries,
    );
    e.amount = "0.10".parse::<Decimal>().unwrap();
    assert_eq!(
        projected_amount(&e, &win(2024, 2)),
        "2.90".parse::<Decimal>().unwrap()
    );
}

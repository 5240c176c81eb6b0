// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::finance::{by_category, monthly_net, trailing_trend, MonthWindow};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("net", sub)) => net(conn, sub)?,
        Some(("by-category", sub)) => category_report(conn, sub)?,
        Some(("trend", sub)) => trend(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn window_arg(sub: &clap::ArgMatches) -> Result<MonthWindow> {
    match sub.get_one::<String>("month") {
        Some(s) => parse_month(s),
        None => Ok(MonthWindow::containing(chrono::Local::now().date_naive())),
    }
}

fn net(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let window = window_arg(sub)?;
    let incomes = store::list_incomes(conn)?;
    let expenses = store::list_expenses(conn)?;
    let summary = monthly_net(&incomes, &expenses, &window);
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![vec![
            window.label(),
            fmt_money(&summary.total_income),
            fmt_money(&summary.total_expenses),
            fmt_money(&summary.net),
        ]];
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}

fn category_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let window = window_arg(sub)?;
    let expenses = store::list_expenses(conn)?;
    let totals = by_category(&expenses, &window);
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows = totals
            .into_iter()
            .map(|(cat, amt)| vec![cat.to_string(), fmt_money(&amt)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn trend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let window = window_arg(sub)?;
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&6);
    let expenses = store::list_expenses(conn)?;
    let points = trailing_trend(&expenses, months, &window);
    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let rows = points
            .into_iter()
            .map(|p| vec![p.label, fmt_money(&p.total)])
            .collect();
        println!("{}", pretty_table(&["Month", "Expenses"], rows));
    }
    Ok(())
}

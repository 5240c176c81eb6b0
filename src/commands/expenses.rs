// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{ExpenseCategory, ExpenseUpdate, Frequency};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_expense(conn, id)?;
            println!("Deleted expense {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let frequency = sub.get_one::<String>("frequency").unwrap().parse::<Frequency>()?;
    let category = sub
        .get_one::<String>("category")
        .unwrap()
        .parse::<ExpenseCategory>()?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());
    let id = store::insert_expense(conn, name, amount, date, frequency, category, note)?;
    println!(
        "Added expense {} '{}' {} ({}, {}, from {})",
        id, name, amount, frequency, category, date
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let up = ExpenseUpdate {
        name: sub.get_one::<String>("name").cloned(),
        amount: match sub.get_one::<String>("amount") {
            Some(s) => Some(parse_amount(s)?),
            None => None,
        },
        effective_date: match sub.get_one::<String>("date") {
            Some(s) => Some(parse_date(s)?),
            None => None,
        },
        frequency: match sub.get_one::<String>("frequency") {
            Some(s) => Some(s.parse::<Frequency>()?),
            None => None,
        },
        category: match sub.get_one::<String>("category") {
            Some(s) => Some(s.parse::<ExpenseCategory>()?),
            None => None,
        },
        note: sub.get_one::<String>("note").cloned(),
    };
    store::update_expense(conn, id, &up)?;
    println!("Updated expense {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let expenses = store::list_expenses(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &expenses)? {
        let rows = expenses
            .into_iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.name,
                    fmt_money(&e.amount),
                    e.frequency.to_string(),
                    e.category.to_string(),
                    e.effective_date.to_string(),
                    e.note.unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Id", "Name", "Amount", "Frequency", "Category", "Since", "Note"
                ],
                rows
            )
        );
    }
    Ok(())
}

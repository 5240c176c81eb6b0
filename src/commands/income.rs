// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{Frequency, IncomeUpdate};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_income(conn, id)?;
            println!("Deleted income {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn parse_income_frequency(s: &str) -> Result<Frequency> {
    let f = s.parse::<Frequency>()?;
    // Daily income is not a thing here; expenses support it, income does not.
    if f == Frequency::Daily {
        anyhow::bail!("Income frequency must be one-time, monthly, or yearly");
    }
    Ok(f)
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let source = sub.get_one::<String>("source").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let frequency = parse_income_frequency(sub.get_one::<String>("frequency").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());
    let id = store::insert_income(conn, source, amount, date, frequency, note)?;
    println!(
        "Added income {} '{}' {} ({}, from {})",
        id, source, amount, frequency, date
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let up = IncomeUpdate {
        source: sub.get_one::<String>("source").cloned(),
        amount: match sub.get_one::<String>("amount") {
            Some(s) => Some(parse_amount(s)?),
            None => None,
        },
        effective_date: match sub.get_one::<String>("date") {
            Some(s) => Some(parse_date(s)?),
            None => None,
        },
        frequency: match sub.get_one::<String>("frequency") {
            Some(s) => Some(parse_income_frequency(s)?),
            None => None,
        },
        note: sub.get_one::<String>("note").cloned(),
    };
    store::update_income(conn, id, &up)?;
    println!("Updated income {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let incomes = store::list_incomes(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &incomes)? {
        let rows = incomes
            .into_iter()
            .map(|i| {
                vec![
                    i.id.to_string(),
                    i.source,
                    fmt_money(&i.amount),
                    i.frequency.to_string(),
                    i.effective_date.to_string(),
                    i.note.unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Source", "Amount", "Frequency", "Since", "Note"],
                rows
            )
        );
    }
    Ok(())
}

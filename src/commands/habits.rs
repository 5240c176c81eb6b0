// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::stats::{habit_rate, habit_streak};
use crate::store;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("check", sub)) => check(conn, sub)?,
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            store::delete_habit(conn, name)?;
            println!("Removed habit '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let started = match sub.get_one::<String>("started") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    store::add_habit(conn, name, started)?;
    println!("Added habit '{}' (since {})", name, started);
    Ok(())
}

fn check(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let id = store::id_for_habit(conn, name)?;
    if store::check_habit(conn, id, date)? {
        println!("Checked '{}' for {}", name, date);
    } else {
        println!("'{}' was already checked for {}", name, date);
    }
    Ok(())
}

#[derive(Serialize)]
struct HabitRow {
    name: String,
    since: String,
    streak: u32,
    rate_30d: u32,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Local::now().date_naive();
    let mut data = Vec::new();
    for h in store::list_habits(conn)? {
        let checks = store::habit_check_dates(conn, h.id)?;
        data.push(HabitRow {
            name: h.name,
            since: h.started.to_string(),
            streak: habit_streak(&checks, today),
            rate_30d: habit_rate(&checks, today, 30),
        });
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|r| {
                vec![
                    r.name,
                    r.since,
                    r.streak.to_string(),
                    format!("{}%", r.rate_30d),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Habit", "Since", "Streak", "30d rate"], rows)
        );
    }
    Ok(())
}

// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;

use crate::models::EventUpdate;
use crate::store;
use crate::utils::{maybe_print_json, parse_date, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("agenda", sub)) => agenda(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_event(conn, id)?;
            println!("Removed event {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let time = sub.get_one::<String>("time").map(|s| s.as_str());
    let location = sub.get_one::<String>("location").map(|s| s.as_str());
    let id = store::add_event(conn, title, date, time, location)?;
    println!("Added event {} '{}' on {}", id, title, date);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let up = EventUpdate {
        title: sub.get_one::<String>("title").cloned(),
        date: match sub.get_one::<String>("date") {
            Some(s) => Some(parse_date(s)?),
            None => None,
        },
        time: sub.get_one::<String>("time").cloned(),
        location: sub.get_one::<String>("location").cloned(),
    };
    store::update_event(conn, id, &up)?;
    println!("Updated event {}", id);
    Ok(())
}

fn agenda(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?.label(),
        None => {
            let today = chrono::Local::now().date_naive();
            format!("{:04}-{:02}", today.year(), today.month())
        }
    };
    let events = store::list_events(conn, Some(&month))?;
    if !maybe_print_json(json_flag, jsonl_flag, &events)? {
        let rows = events
            .into_iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.to_string(),
                    e.time.unwrap_or_default(),
                    e.title,
                    e.location.unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Time", "Event", "Location"], rows)
        );
    }
    Ok(())
}

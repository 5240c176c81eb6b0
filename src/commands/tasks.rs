// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{Priority, Task, TaskUpdate};
use crate::store;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("done", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::set_task_done(conn, id, true)?;
            println!("Task {} done", id);
        }
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_task(conn, id)?;
            println!("Deleted task {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let priority = sub.get_one::<String>("priority").unwrap().parse::<Priority>()?;
    let due = match sub.get_one::<String>("due") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let note = sub.get_one::<String>("note").map(|s| s.as_str());
    let id = store::add_task(conn, title, priority, due, note)?;
    println!("Added task {} '{}'", id, title);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let up = TaskUpdate {
        title: sub.get_one::<String>("title").cloned(),
        priority: match sub.get_one::<String>("priority") {
            Some(s) => Some(s.parse::<Priority>()?),
            None => None,
        },
        due: match sub.get_one::<String>("due") {
            Some(s) => Some(parse_date(s)?),
            None => None,
        },
        note: sub.get_one::<String>("note").cloned(),
    };
    store::update_task(conn, id, &up)?;
    println!("Updated task {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let tasks = store::list_tasks(conn, sub.get_flag("all"))?;
    if !maybe_print_json(json_flag, jsonl_flag, &tasks)? {
        let rows = tasks.iter().map(task_row).collect();
        println!(
            "{}",
            pretty_table(&["Id", "Title", "Priority", "Due", "Status"], rows)
        );
    }
    Ok(())
}

fn task_row(t: &Task) -> Vec<String> {
    vec![
        t.id.to_string(),
        t.title.clone(),
        t.priority.as_str().to_string(),
        t.due.map(|d| d.to_string()).unwrap_or_default(),
        if t.done { "done" } else { "open" }.to_string(),
    ]
}

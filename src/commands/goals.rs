// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::models::GoalUpdate;
use crate::stats::goal_progress;
use crate::store;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_goal(conn, id)?;
            println!("Removed goal {}", id);
        }
        Some(("step", sub)) => step(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let target = match sub.get_one::<String>("target") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let id = store::add_goal(conn, title, target)?;
    println!("Added goal {} '{}'", id, title);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let up = GoalUpdate {
        title: sub.get_one::<String>("title").cloned(),
        target_date: match sub.get_one::<String>("target") {
            Some(s) => Some(parse_date(s)?),
            None => None,
        },
    };
    store::update_goal(conn, id, &up)?;
    println!("Updated goal {}", id);
    Ok(())
}

#[derive(Serialize)]
struct GoalRow {
    id: i64,
    title: String,
    target: String,
    progress: u32,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = Vec::new();
    for g in store::list_goals(conn)? {
        let steps = store::goal_steps(conn, g.id)?;
        data.push(GoalRow {
            id: g.id,
            title: g.title,
            target: g.target_date.map(|d| d.to_string()).unwrap_or_default(),
            progress: goal_progress(&steps),
        });
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.title,
                    r.target,
                    format!("{}%", r.progress),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Goal", "Target", "Progress"], rows)
        );
    }
    Ok(())
}

fn step(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let goal_id = *sub.get_one::<i64>("goal-id").unwrap();
            let title = sub.get_one::<String>("title").unwrap();
            let id = store::add_goal_step(conn, goal_id, title)?;
            println!("Added step {} to goal {}", id, goal_id);
        }
        Some(("done", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::set_step_done(conn, id, true)?;
            println!("Step {} done", id);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let goal_id = *sub.get_one::<i64>("goal-id").unwrap();
            let steps = store::goal_steps(conn, goal_id)?;
            if !maybe_print_json(json_flag, jsonl_flag, &steps)? {
                let rows = steps
                    .into_iter()
                    .map(|s| {
                        vec![
                            s.id.to_string(),
                            s.title,
                            if s.done { "done" } else { "open" }.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Step", "Status"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}

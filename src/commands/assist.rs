// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Duration};
use rusqlite::Connection;

use crate::ai::{self, Assistant, HttpAssistant};
use crate::finance::{monthly_net, MonthWindow};
use crate::store;
use crate::utils::pretty_table;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-model", sub)) => {
            let model = sub.get_one::<String>("model").unwrap();
            store::set_setting(conn, "ai_model", model)?;
            println!("Assist model set to {}", model);
            Ok(())
        }
        Some((name, sub)) => {
            let assistant = HttpAssistant::from_env(&store::ai_model(conn)?)?;
            dispatch(conn, name, sub, &assistant)
        }
        None => Ok(()),
    }
}

fn dispatch(
    conn: &Connection,
    name: &str,
    sub: &clap::ArgMatches,
    assistant: &dyn Assistant,
) -> Result<()> {
    match name {
        "breakdown" => {
            let task_id = *sub.get_one::<i64>("task-id").unwrap();
            let save = sub.get_flag("save");
            let steps = run_breakdown(conn, task_id, save, assistant)?;
            let rows = steps.into_iter().map(|s| vec![s]).collect();
            println!("{}", pretty_table(&["Subtask"], rows));
            if save {
                println!("Saved as new tasks.");
            }
        }
        "prioritize" => {
            let ranked = run_prioritize(conn, assistant)?;
            let rows = ranked
                .into_iter()
                .enumerate()
                .map(|(i, t)| {
                    vec![
                        (i + 1).to_string(),
                        t.id.to_string(),
                        t.title,
                        t.priority.as_str().to_string(),
                        t.due.map(|d| d.to_string()).unwrap_or_default(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Rank", "Id", "Title", "Priority", "Due"], rows)
            );
        }
        "weekly-review" => {
            println!("{}", run_weekly_review(conn, assistant)?);
        }
        _ => {}
    }
    Ok(())
}

/// Asks the model to split a task into subtasks. With `save`, each
/// subtask is inserted as a task inheriting the parent's priority/due.
pub fn run_breakdown(
    conn: &Connection,
    task_id: i64,
    save: bool,
    assistant: &dyn Assistant,
) -> Result<Vec<String>> {
    let task = store::get_task(conn, task_id)?;
    let raw = assistant.complete(&ai::breakdown_prompt(&task.title, task.note.as_deref()))?;
    let steps = ai::parse_breakdown(&raw)?;
    if save {
        for s in &steps {
            store::add_task(
                conn,
                s,
                task.priority,
                task.due,
                Some(&format!("from task {}", task_id)),
            )?;
        }
    }
    Ok(steps)
}

/// Open tasks in model-suggested urgency order.
pub fn run_prioritize(
    conn: &Connection,
    assistant: &dyn Assistant,
) -> Result<Vec<crate::models::Task>> {
    let tasks = store::list_tasks(conn, false)?;
    if tasks.is_empty() {
        return Ok(tasks);
    }
    let raw = assistant.complete(&ai::prioritize_prompt(&tasks))?;
    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    let order = ai::parse_ranking(&raw, &ids)?;
    let mut ranked = Vec::with_capacity(tasks.len());
    for id in order {
        if let Some(t) = tasks.iter().find(|t| t.id == id) {
            ranked.push(t.clone());
        }
    }
    Ok(ranked)
}

pub fn run_weekly_review(conn: &Connection, assistant: &dyn Assistant) -> Result<String> {
    let today = chrono::Local::now().date_naive();
    let week_ago = today - Duration::days(6);

    let mut checks = 0usize;
    for h in store::list_habits(conn)? {
        checks += store::habit_check_dates(conn, h.id)?
            .iter()
            .filter(|d| **d >= week_ago && **d <= today)
            .count();
    }
    let tasks = store::list_tasks(conn, true)?;
    let done = tasks.iter().filter(|t| t.done).count();
    let open = tasks.len() - done;

    let window = MonthWindow::containing(today);
    let summary = monthly_net(
        &store::list_incomes(conn)?,
        &store::list_expenses(conn)?,
        &window,
    );

    let text = format!(
        "Week {} to {} ({}-{:02}).\n\
         Habit check-offs this week: {}.\n\
         Tasks: {} done, {} open.\n\
         Month so far: income {:.2}, expenses {:.2}, net {:.2}.",
        week_ago,
        today,
        today.year(),
        today.month(),
        checks,
        done,
        open,
        summary.total_income,
        summary.total_expenses,
        summary.net
    );
    Ok(assistant.complete(&ai::weekly_review_prompt(&text))?)
}

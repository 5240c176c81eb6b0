// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Repository layer over the SQLite store. Commands read snapshots here
//! and hand them to the pure aggregation code; nothing below this module
//! ever sees a `Connection`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::models::{
    Event, EventUpdate, Expense, ExpenseCategory, ExpenseUpdate, Frequency, Goal, GoalStep,
    GoalUpdate, Habit, Income, IncomeUpdate, MediaItem, MediaKind, MediaStatus, MediaUpdate,
    Priority, Task, TaskUpdate,
};

fn parse_stored_date(s: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid stored date '{}' in {}", s, what))
}

fn parse_stored_amount(s: &str, what: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid stored amount '{}' in {}", s, what))
}

// --- settings -------------------------------------------------------------

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn ai_model(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "ai_model")?.unwrap_or_else(|| "gemini-2.0-flash".to_string()))
}

// --- habits ---------------------------------------------------------------

pub fn add_habit(conn: &Connection, name: &str, started: NaiveDate) -> Result<i64> {
    conn.execute(
        "INSERT INTO habits(name, started) VALUES (?1, ?2)",
        params![name, started.to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_habits(conn: &Connection) -> Result<Vec<Habit>> {
    let mut stmt = conn.prepare("SELECT id, name, started FROM habits ORDER BY name")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, name, started) = row?;
        out.push(Habit {
            id,
            name,
            started: parse_stored_date(&started, "habits")?,
        });
    }
    Ok(out)
}

pub fn id_for_habit(conn: &Connection, name: &str) -> Result<i64> {
    let mut stmt = conn.prepare("SELECT id FROM habits WHERE name=?1")?;
    let id: i64 = stmt
        .query_row(params![name], |r| r.get(0))
        .with_context(|| format!("Habit '{}' not found", name))?;
    Ok(id)
}

pub fn delete_habit(conn: &Connection, name: &str) -> Result<()> {
    let n = conn.execute("DELETE FROM habits WHERE name=?1", params![name])?;
    if n == 0 {
        anyhow::bail!("Habit '{}' not found", name);
    }
    Ok(())
}

/// Records a check-off; returns false when the day was already checked.
pub fn check_habit(conn: &Connection, habit_id: i64, date: NaiveDate) -> Result<bool> {
    let n = conn.execute(
        "INSERT OR IGNORE INTO habit_checks(habit_id, date) VALUES (?1, ?2)",
        params![habit_id, date.to_string()],
    )?;
    Ok(n > 0)
}

pub fn habit_check_dates(conn: &Connection, habit_id: i64) -> Result<Vec<NaiveDate>> {
    let mut stmt =
        conn.prepare("SELECT date FROM habit_checks WHERE habit_id=?1 ORDER BY date")?;
    let rows = stmt.query_map(params![habit_id], |r| r.get::<_, String>(0))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(parse_stored_date(&row?, "habit_checks")?);
    }
    Ok(out)
}

// --- goals ----------------------------------------------------------------

pub fn add_goal(conn: &Connection, title: &str, target_date: Option<NaiveDate>) -> Result<i64> {
    conn.execute(
        "INSERT INTO goals(title, target_date) VALUES (?1, ?2)",
        params![title, target_date.map(|d| d.to_string())],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_goals(conn: &Connection) -> Result<Vec<Goal>> {
    let mut stmt = conn.prepare("SELECT id, title, target_date FROM goals ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, Option<String>>(2)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, title, target) = row?;
        out.push(Goal {
            id,
            title,
            target_date: match target {
                Some(s) => Some(parse_stored_date(&s, "goals")?),
                None => None,
            },
        });
    }
    Ok(out)
}

pub fn update_goal(conn: &Connection, id: i64, up: &GoalUpdate) -> Result<()> {
    let mut sets: Vec<&str> = Vec::new();
    let mut vals: Vec<String> = Vec::new();
    if let Some(ref t) = up.title {
        sets.push("title=?");
        vals.push(t.clone());
    }
    if let Some(d) = up.target_date {
        sets.push("target_date=?");
        vals.push(d.to_string());
    }
    apply_update(conn, "goals", id, &sets, vals)
}

pub fn delete_goal(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM goals WHERE id=?1", params![id])?;
    if n == 0 {
        anyhow::bail!("Goal {} not found", id);
    }
    Ok(())
}

pub fn add_goal_step(conn: &Connection, goal_id: i64, title: &str) -> Result<i64> {
    // FK is deferred to a friendlier error than sqlite's constraint text
    let exists: Option<i64> = conn
        .query_row("SELECT id FROM goals WHERE id=?1", params![goal_id], |r| {
            r.get(0)
        })
        .optional()?;
    if exists.is_none() {
        anyhow::bail!("Goal {} not found", goal_id);
    }
    conn.execute(
        "INSERT INTO goal_steps(goal_id, title) VALUES (?1, ?2)",
        params![goal_id, title],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn goal_steps(conn: &Connection, goal_id: i64) -> Result<Vec<GoalStep>> {
    let mut stmt =
        conn.prepare("SELECT id, goal_id, title, done FROM goal_steps WHERE goal_id=?1 ORDER BY id")?;
    let rows = stmt.query_map(params![goal_id], |r| {
        Ok(GoalStep {
            id: r.get(0)?,
            goal_id: r.get(1)?,
            title: r.get(2)?,
            done: r.get::<_, i64>(3)? != 0,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn set_step_done(conn: &Connection, step_id: i64, done: bool) -> Result<()> {
    let n = conn.execute(
        "UPDATE goal_steps SET done=?1 WHERE id=?2",
        params![done as i64, step_id],
    )?;
    if n == 0 {
        anyhow::bail!("Step {} not found", step_id);
    }
    Ok(())
}

// --- tasks ----------------------------------------------------------------

pub fn add_task(
    conn: &Connection,
    title: &str,
    priority: Priority,
    due: Option<NaiveDate>,
    note: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO tasks(title, priority, due, note) VALUES (?1, ?2, ?3, ?4)",
        params![title, priority.as_str(), due.map(|d| d.to_string()), note],
    )?;
    Ok(conn.last_insert_rowid())
}

fn task_from_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, String, Option<String>, i64, Option<String>)> {
    Ok((
        r.get(0)?,
        r.get(1)?,
        r.get(2)?,
        r.get(3)?,
        r.get(4)?,
        r.get(5)?,
    ))
}

fn finish_task(raw: (i64, String, String, Option<String>, i64, Option<String>)) -> Result<Task> {
    let (id, title, priority, due, done, note) = raw;
    Ok(Task {
        id,
        title,
        priority: priority
            .parse::<Priority>()
            .with_context(|| format!("Invalid stored priority in task {}", id))?,
        due: match due {
            Some(s) => Some(parse_stored_date(&s, "tasks")?),
            None => None,
        },
        done: done != 0,
        note,
    })
}

pub fn list_tasks(conn: &Connection, include_done: bool) -> Result<Vec<Task>> {
    let sql = if include_done {
        "SELECT id, title, priority, due, done, note FROM tasks ORDER BY done, due IS NULL, due, id"
    } else {
        "SELECT id, title, priority, due, done, note FROM tasks WHERE done=0 ORDER BY due IS NULL, due, id"
    };
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], task_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(finish_task(row?)?);
    }
    Ok(out)
}

pub fn get_task(conn: &Connection, id: i64) -> Result<Task> {
    let raw = conn
        .query_row(
            "SELECT id, title, priority, due, done, note FROM tasks WHERE id=?1",
            params![id],
            task_from_row,
        )
        .with_context(|| format!("Task {} not found", id))?;
    finish_task(raw)
}

pub fn update_task(conn: &Connection, id: i64, up: &TaskUpdate) -> Result<()> {
    let mut sets: Vec<&str> = Vec::new();
    let mut vals: Vec<String> = Vec::new();
    if let Some(ref t) = up.title {
        sets.push("title=?");
        vals.push(t.clone());
    }
    if let Some(p) = up.priority {
        sets.push("priority=?");
        vals.push(p.as_str().to_string());
    }
    if let Some(d) = up.due {
        sets.push("due=?");
        vals.push(d.to_string());
    }
    if let Some(ref n) = up.note {
        sets.push("note=?");
        vals.push(n.clone());
    }
    apply_update(conn, "tasks", id, &sets, vals)
}

pub fn set_task_done(conn: &Connection, id: i64, done: bool) -> Result<()> {
    let n = conn.execute(
        "UPDATE tasks SET done=?1 WHERE id=?2",
        params![done as i64, id],
    )?;
    if n == 0 {
        anyhow::bail!("Task {} not found", id);
    }
    Ok(())
}

pub fn delete_task(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM tasks WHERE id=?1", params![id])?;
    if n == 0 {
        anyhow::bail!("Task {} not found", id);
    }
    Ok(())
}

// --- events ---------------------------------------------------------------

pub fn add_event(
    conn: &Connection,
    title: &str,
    date: NaiveDate,
    time: Option<&str>,
    location: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO events(title, date, time, location) VALUES (?1, ?2, ?3, ?4)",
        params![title, date.to_string(), time, location],
    )?;
    Ok(conn.last_insert_rowid())
}

/// `month` filters on the `YYYY-MM` prefix when present.
pub fn list_events(conn: &Connection, month: Option<&str>) -> Result<Vec<Event>> {
    let mut sql = String::from("SELECT id, title, date, time, location FROM events");
    if month.is_some() {
        sql.push_str(" WHERE substr(date,1,7)=?1");
    }
    sql.push_str(" ORDER BY date, time");
    let mut stmt = conn.prepare(&sql)?;
    let map_row = |r: &rusqlite::Row<'_>| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, Option<String>>(3)?,
            r.get::<_, Option<String>>(4)?,
        ))
    };
    let rows = match month {
        Some(m) => stmt.query_map(params![m], map_row)?,
        None => stmt.query_map([], map_row)?,
    };
    let mut out = Vec::new();
    for row in rows {
        let (id, title, date, time, location) = row?;
        out.push(Event {
            id,
            title,
            date: parse_stored_date(&date, "events")?,
            time,
            location,
        });
    }
    Ok(out)
}

pub fn update_event(conn: &Connection, id: i64, up: &EventUpdate) -> Result<()> {
    let mut sets: Vec<&str> = Vec::new();
    let mut vals: Vec<String> = Vec::new();
    if let Some(ref t) = up.title {
        sets.push("title=?");
        vals.push(t.clone());
    }
    if let Some(d) = up.date {
        sets.push("date=?");
        vals.push(d.to_string());
    }
    if let Some(ref t) = up.time {
        sets.push("time=?");
        vals.push(t.clone());
    }
    if let Some(ref l) = up.location {
        sets.push("location=?");
        vals.push(l.clone());
    }
    apply_update(conn, "events", id, &sets, vals)
}

pub fn delete_event(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM events WHERE id=?1", params![id])?;
    if n == 0 {
        anyhow::bail!("Event {} not found", id);
    }
    Ok(())
}

// --- incomes --------------------------------------------------------------

pub fn insert_income(
    conn: &Connection,
    source: &str,
    amount: Decimal,
    effective_date: NaiveDate,
    frequency: Frequency,
    note: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO incomes(source, amount, effective_date, frequency, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            source,
            amount.to_string(),
            effective_date.to_string(),
            frequency.as_str(),
            note
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_incomes(conn: &Connection) -> Result<Vec<Income>> {
    let mut stmt = conn.prepare(
        "SELECT id, source, amount, effective_date, frequency, note FROM incomes ORDER BY id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, Option<String>>(5)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, source, amount, date, freq, note) = row?;
        out.push(Income {
            id,
            source,
            amount: parse_stored_amount(&amount, "incomes")?,
            effective_date: parse_stored_date(&date, "incomes")?,
            frequency: freq.parse::<Frequency>()?,
            note,
        });
    }
    Ok(out)
}

pub fn update_income(conn: &Connection, id: i64, up: &IncomeUpdate) -> Result<()> {
    let mut sets: Vec<&str> = Vec::new();
    let mut vals: Vec<String> = Vec::new();
    if let Some(ref s) = up.source {
        sets.push("source=?");
        vals.push(s.clone());
    }
    if let Some(a) = up.amount {
        sets.push("amount=?");
        vals.push(a.to_string());
    }
    if let Some(d) = up.effective_date {
        sets.push("effective_date=?");
        vals.push(d.to_string());
    }
    if let Some(f) = up.frequency {
        sets.push("frequency=?");
        vals.push(f.as_str().to_string());
    }
    if let Some(ref n) = up.note {
        sets.push("note=?");
        vals.push(n.clone());
    }
    apply_update(conn, "incomes", id, &sets, vals)
}

pub fn delete_income(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM incomes WHERE id=?1", params![id])?;
    if n == 0 {
        anyhow::bail!("Income {} not found", id);
    }
    Ok(())
}

// --- expenses -------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
pub fn insert_expense(
    conn: &Connection,
    name: &str,
    amount: Decimal,
    effective_date: NaiveDate,
    frequency: Frequency,
    category: ExpenseCategory,
    note: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO expenses(name, amount, effective_date, frequency, category, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            name,
            amount.to_string(),
            effective_date.to_string(),
            frequency.as_str(),
            category.as_str(),
            note
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_expenses(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, amount, effective_date, frequency, category, note
         FROM expenses ORDER BY id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, Option<String>>(6)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, name, amount, date, freq, cat, note) = row?;
        out.push(Expense {
            id,
            name,
            amount: parse_stored_amount(&amount, "expenses")?,
            effective_date: parse_stored_date(&date, "expenses")?,
            frequency: freq.parse::<Frequency>()?,
            category: cat.parse::<ExpenseCategory>()?,
            note,
        });
    }
    Ok(out)
}

pub fn update_expense(conn: &Connection, id: i64, up: &ExpenseUpdate) -> Result<()> {
    let mut sets: Vec<&str> = Vec::new();
    let mut vals: Vec<String> = Vec::new();
    if let Some(ref s) = up.name {
        sets.push("name=?");
        vals.push(s.clone());
    }
    if let Some(a) = up.amount {
        sets.push("amount=?");
        vals.push(a.to_string());
    }
    if let Some(d) = up.effective_date {
        sets.push("effective_date=?");
        vals.push(d.to_string());
    }
    if let Some(f) = up.frequency {
        sets.push("frequency=?");
        vals.push(f.as_str().to_string());
    }
    if let Some(c) = up.category {
        sets.push("category=?");
        vals.push(c.as_str().to_string());
    }
    if let Some(ref n) = up.note {
        sets.push("note=?");
        vals.push(n.clone());
    }
    apply_update(conn, "expenses", id, &sets, vals)
}

pub fn delete_expense(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    if n == 0 {
        anyhow::bail!("Expense {} not found", id);
    }
    Ok(())
}

// --- media ----------------------------------------------------------------

pub fn add_media(conn: &Connection, title: &str, kind: MediaKind) -> Result<i64> {
    conn.execute(
        "INSERT INTO media(title, kind) VALUES (?1, ?2)",
        params![title, kind.as_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_media(conn: &Connection, status: Option<MediaStatus>) -> Result<Vec<MediaItem>> {
    let mut sql = String::from("SELECT id, title, kind, status, rating FROM media");
    if status.is_some() {
        sql.push_str(" WHERE status=?1");
    }
    sql.push_str(" ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let map_row = |r: &rusqlite::Row<'_>| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, Option<i64>>(4)?,
        ))
    };
    let rows = match status {
        Some(s) => stmt.query_map(params![s.as_str()], map_row)?,
        None => stmt.query_map([], map_row)?,
    };
    let mut out = Vec::new();
    for row in rows {
        let (id, title, kind, status, rating) = row?;
        out.push(MediaItem {
            id,
            title,
            kind: kind.parse::<MediaKind>()?,
            status: status.parse::<MediaStatus>()?,
            rating: rating.map(|v| v as u8),
        });
    }
    Ok(out)
}

pub fn update_media(conn: &Connection, id: i64, up: &MediaUpdate) -> Result<()> {
    let mut sets: Vec<&str> = Vec::new();
    let mut vals: Vec<String> = Vec::new();
    if let Some(ref t) = up.title {
        sets.push("title=?");
        vals.push(t.clone());
    }
    if let Some(k) = up.kind {
        sets.push("kind=?");
        vals.push(k.as_str().to_string());
    }
    if let Some(s) = up.status {
        sets.push("status=?");
        vals.push(s.as_str().to_string());
    }
    if let Some(r) = up.rating {
        sets.push("rating=?");
        vals.push(r.to_string());
    }
    apply_update(conn, "media", id, &sets, vals)
}

pub fn delete_media(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM media WHERE id=?1", params![id])?;
    if n == 0 {
        anyhow::bail!("Media item {} not found", id);
    }
    Ok(())
}

// --- shared update plumbing ----------------------------------------------

fn apply_update(
    conn: &Connection,
    table: &str,
    id: i64,
    sets: &[&str],
    vals: Vec<String>,
) -> Result<()> {
    if sets.is_empty() {
        anyhow::bail!("Nothing to update");
    }
    let sql = format!("UPDATE {} SET {} WHERE id=?", table, sets.join(", "));
    let mut refs: Vec<&dyn rusqlite::ToSql> =
        vals.iter().map(|s| s as &dyn rusqlite::ToSql).collect();
    refs.push(&id);
    let n = conn.execute(&sql, rusqlite::params_from_iter(refs))?;
    if n == 0 {
        anyhow::bail!("No row with id {} in {}", id, table);
    }
    Ok(())
}

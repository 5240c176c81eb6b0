// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::utils::pretty_table;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Amounts that do not parse or are negative
    for table in ["incomes", "expenses"] {
        let mut stmt =
            conn.prepare(&format!("SELECT id, amount FROM {} ORDER BY id", table))?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let id: i64 = r.get(0)?;
            let amount: String = r.get(1)?;
            match amount.parse::<Decimal>() {
                Ok(d) if d.is_sign_negative() => {
                    rows.push(vec![
                        "negative_amount".into(),
                        format!("{} id={} ({})", table, id, amount),
                    ]);
                }
                Ok(_) => {}
                Err(_) => {
                    rows.push(vec![
                        "bad_amount".into(),
                        format!("{} id={} ({})", table, id, amount),
                    ]);
                }
            }
        }
    }

    // 2) Dates that do not parse
    for (table, col) in [
        ("incomes", "effective_date"),
        ("expenses", "effective_date"),
        ("events", "date"),
        ("habit_checks", "date"),
    ] {
        let mut stmt =
            conn.prepare(&format!("SELECT id, {} FROM {} ORDER BY id", col, table))?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let id: i64 = r.get(0)?;
            let d: String = r.get(1)?;
            if chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").is_err() {
                rows.push(vec![
                    "bad_date".into(),
                    format!("{} id={} ({})", table, id, d),
                ]);
            }
        }
    }

    // 3) Steps pointing at missing goals (possible with FKs off)
    let mut stmt = conn.prepare(
        "SELECT s.id FROM goal_steps s LEFT JOIN goals g ON s.goal_id=g.id WHERE g.id IS NULL",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["orphan_step".into(), format!("goal_steps id={}", id)]);
    }

    // 4) Ratings out of range
    let mut stmt = conn.prepare(
        "SELECT id, rating FROM media WHERE rating IS NOT NULL AND (rating < 1 OR rating > 10)",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let rating: i64 = r.get(1)?;
        rows.push(vec![
            "bad_rating".into(),
            format!("media id={} ({})", id, rating),
        ]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

use crate::store;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("entries", sub)) => export_entries(conn, sub),
        _ => Ok(()),
    }
}

/// Income and expense entries in one file; `kind` tells them apart.
fn export_entries(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let incomes = store::list_incomes(conn)?;
    let expenses = store::list_expenses(conn)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "kind",
                "name",
                "amount",
                "effective_date",
                "frequency",
                "category",
                "note",
            ])?;
            for i in &incomes {
                wtr.write_record([
                    "income".to_string(),
                    i.source.clone(),
                    i.amount.to_string(),
                    i.effective_date.to_string(),
                    i.frequency.as_str().to_string(),
                    String::new(),
                    i.note.clone().unwrap_or_default(),
                ])?;
            }
            for e in &expenses {
                wtr.write_record([
                    "expense".to_string(),
                    e.name.clone(),
                    e.amount.to_string(),
                    e.effective_date.to_string(),
                    e.frequency.as_str().to_string(),
                    e.category.as_str().to_string(),
                    e.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for i in &incomes {
                items.push(json!({
                    "kind": "income",
                    "name": i.source,
                    "amount": i.amount.to_string(),
                    "effective_date": i.effective_date.to_string(),
                    "frequency": i.frequency.as_str(),
                    "category": serde_json::Value::Null,
                    "note": i.note,
                }));
            }
            for e in &expenses {
                items.push(json!({
                    "kind": "expense",
                    "name": e.name,
                    "amount": e.amount.to_string(),
                    "effective_date": e.effective_date.to_string(),
                    "frequency": e.frequency.as_str(),
                    "category": e.category.as_str(),
                    "note": e.note,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => {
            anyhow::bail!("Unknown format: {} (use csv|json)", other);
        }
    }
    println!("Exported entries to {}", out);
    Ok(())
}

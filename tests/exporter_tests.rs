// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use lifehub::models::{ExpenseCategory, Frequency};
use lifehub::{cli, commands::exporter, db, store};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn seeded_conn() -> rusqlite::Connection {
    let conn = db::open_in_memory().unwrap();
    store::insert_income(
        &conn,
        "Salary",
        Decimal::from(5000),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        Frequency::OneTime,
        None,
    )
    .unwrap();
    store::insert_expense(
        &conn,
        "Netflix",
        Decimal::from(200),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        Frequency::Monthly,
        ExpenseCategory::Subscription,
        Some("shared plan"),
    )
    .unwrap();
    conn
}

fn run_export(conn: &rusqlite::Connection, format: &str, out: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "lifehub", "export", "entries", "--format", format, "--out", out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_entries_as_pretty_json() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("entries.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&conn, "json", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "kind": "income",
                "name": "Salary",
                "amount": "5000",
                "effective_date": "2024-03-10",
                "frequency": "one-time",
                "category": null,
                "note": null
            },
            {
                "kind": "expense",
                "name": "Netflix",
                "amount": "200",
                "effective_date": "2024-01-01",
                "frequency": "monthly",
                "category": "subscription",
                "note": "shared plan"
            }
        ])
    );
}

#[test]
fn export_entries_as_csv() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("entries.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&conn, "csv", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "kind,name,amount,effective_date,frequency,category,note"
    );
    assert_eq!(
        lines.next().unwrap(),
        "income,Salary,5000,2024-03-10,one-time,,"
    );
    assert_eq!(
        lines.next().unwrap(),
        "expense,Netflix,200,2024-01-01,monthly,subscription,shared plan"
    );
}

#[test]
fn export_rejects_unknown_format() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("entries.xml");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&conn, "xml", &out_str).is_err());
    assert!(!out_path.exists());
}

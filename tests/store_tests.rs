// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use lifehub::db;
use lifehub::models::{
    ExpenseCategory, ExpenseUpdate, Frequency, MediaKind, MediaStatus, MediaUpdate, Priority,
    TaskUpdate,
};
use lifehub::store;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn expense_roundtrip_and_typed_update() {
    let conn = db::open_in_memory().unwrap();
    let id = store::insert_expense(
        &conn,
        "Netflix",
        Decimal::from(200),
        date(2024, 1, 1),
        Frequency::Monthly,
        ExpenseCategory::Subscription,
        None,
    )
    .unwrap();

    let all = store::list_expenses(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].amount, Decimal::from(200));
    assert_eq!(all[0].frequency, Frequency::Monthly);
    assert_eq!(all[0].category, ExpenseCategory::Subscription);

    // Only the amount changes; every None field stays as stored
    store::update_expense(
        &conn,
        id,
        &ExpenseUpdate {
            amount: Some(Decimal::from(250)),
            ..Default::default()
        },
    )
    .unwrap();
    let e = &store::list_expenses(&conn).unwrap()[0];
    assert_eq!(e.amount, Decimal::from(250));
    assert_eq!(e.name, "Netflix");
    assert_eq!(e.effective_date, date(2024, 1, 1));
    assert_eq!(e.category, ExpenseCategory::Subscription);
}

#[test]
fn empty_update_is_rejected() {
    let conn = db::open_in_memory().unwrap();
    let id = store::insert_expense(
        &conn,
        "Rent",
        Decimal::from(900),
        date(2024, 1, 1),
        Frequency::Monthly,
        ExpenseCategory::Other,
        None,
    )
    .unwrap();
    assert!(store::update_expense(&conn, id, &ExpenseUpdate::default()).is_err());
}

#[test]
fn update_of_missing_row_errors() {
    let conn = db::open_in_memory().unwrap();
    let up = ExpenseUpdate {
        amount: Some(Decimal::from(1)),
        ..Default::default()
    };
    assert!(store::update_expense(&conn, 42, &up).is_err());
}

#[test]
fn deletion_is_immediate_and_permanent() {
    let conn = db::open_in_memory().unwrap();
    let id = store::insert_income(
        &conn,
        "Salary",
        Decimal::from(5000),
        date(2024, 3, 10),
        Frequency::OneTime,
        None,
    )
    .unwrap();
    assert_eq!(store::list_incomes(&conn).unwrap().len(), 1);
    store::delete_income(&conn, id).unwrap();
    assert!(store::list_incomes(&conn).unwrap().is_empty());
    assert!(store::delete_income(&conn, id).is_err());
}

#[test]
fn task_lifecycle() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_task(
        &conn,
        "Write report",
        Priority::High,
        Some(date(2024, 6, 1)),
        None,
    )
    .unwrap();

    let open = store::list_tasks(&conn, false).unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].priority, Priority::High);

    store::update_task(
        &conn,
        id,
        &TaskUpdate {
            priority: Some(Priority::Low),
            note: Some("moved out".into()),
            ..Default::default()
        },
    )
    .unwrap();
    let t = store::get_task(&conn, id).unwrap();
    assert_eq!(t.priority, Priority::Low);
    assert_eq!(t.note.as_deref(), Some("moved out"));
    assert_eq!(t.title, "Write report");

    store::set_task_done(&conn, id, true).unwrap();
    assert!(store::list_tasks(&conn, false).unwrap().is_empty());
    assert_eq!(store::list_tasks(&conn, true).unwrap().len(), 1);
}

#[test]
fn events_filter_by_month_prefix() {
    let conn = db::open_in_memory().unwrap();
    store::add_event(&conn, "Dentist", date(2024, 6, 12), Some("09:30"), None).unwrap();
    store::add_event(&conn, "Flight", date(2024, 7, 1), None, Some("SFO")).unwrap();

    let june = store::list_events(&conn, Some("2024-06")).unwrap();
    assert_eq!(june.len(), 1);
    assert_eq!(june[0].title, "Dentist");
    assert_eq!(store::list_events(&conn, None).unwrap().len(), 2);
}

#[test]
fn media_status_and_rating() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_media(&conn, "Dune", MediaKind::Movie).unwrap();
    let items = store::list_media(&conn, Some(MediaStatus::Planned)).unwrap();
    assert_eq!(items.len(), 1);

    store::update_media(
        &conn,
        id,
        &MediaUpdate {
            status: Some(MediaStatus::Done),
            rating: Some(9),
            ..Default::default()
        },
    )
    .unwrap();
    let done = store::list_media(&conn, Some(MediaStatus::Done)).unwrap();
    assert_eq!(done[0].rating, Some(9));
    assert!(store::list_media(&conn, Some(MediaStatus::Planned))
        .unwrap()
        .is_empty());
}

#[test]
fn settings_upsert() {
    let conn = db::open_in_memory().unwrap();
    assert_eq!(store::ai_model(&conn).unwrap(), "gemini-2.0-flash");
    store::set_setting(&conn, "ai_model", "gemini-2.0-pro").unwrap();
    store::set_setting(&conn, "ai_model", "gemini-2.5-pro").unwrap();
    assert_eq!(store::ai_model(&conn).unwrap(), "gemini-2.5-pro");
}

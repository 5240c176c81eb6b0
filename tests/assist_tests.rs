// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use lifehub::ai::{self, AssistError, Assistant};
use lifehub::commands::assist;
use lifehub::db;
use lifehub::models::Priority;
use lifehub::store;

struct CannedAssistant {
    reply: String,
}

impl Assistant for CannedAssistant {
    fn complete(&self, _prompt: &str) -> Result<String, AssistError> {
        Ok(self.reply.clone())
    }
}

#[test]
fn parse_breakdown_accepts_fenced_json() {
    let raw = "```json\n[\"Outline\", \"Draft\", \"Review\"]\n```";
    let steps = ai::parse_breakdown(raw).unwrap();
    assert_eq!(steps, vec!["Outline", "Draft", "Review"]);
}

#[test]
fn parse_breakdown_rejects_non_arrays_and_empties() {
    assert!(ai::parse_breakdown("{\"oops\": 1}").is_err());
    assert!(ai::parse_breakdown("[]").is_err());
    assert!(ai::parse_breakdown("[\"ok\", 7]").is_err());
    assert!(ai::parse_breakdown("not json at all").is_err());
}

#[test]
fn parse_ranking_rejects_unknown_ids_and_appends_dropped() {
    let known = [1i64, 2, 3];
    assert_eq!(ai::parse_ranking("[3, 1, 2]", &known).unwrap(), vec![3, 1, 2]);
    // Model forgot id 2: it keeps input order at the tail
    assert_eq!(ai::parse_ranking("[3, 1]", &known).unwrap(), vec![3, 1, 2]);
    // Hallucinated id is a schema error
    assert!(ai::parse_ranking("[3, 9]", &known).is_err());
    // Duplicates collapse
    assert_eq!(ai::parse_ranking("[2, 2, 1]", &known).unwrap(), vec![2, 1, 3]);
}

#[test]
fn breakdown_saves_subtasks_inheriting_priority() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_task(&conn, "Plan the move", Priority::High, None, None).unwrap();
    let assistant = CannedAssistant {
        reply: "[\"Book movers\", \"Pack boxes\"]".into(),
    };

    let steps = assist::run_breakdown(&conn, id, true, &assistant).unwrap();
    assert_eq!(steps.len(), 2);

    let tasks = store::list_tasks(&conn, false).unwrap();
    assert_eq!(tasks.len(), 3);
    let saved: Vec<_> = tasks.iter().filter(|t| t.id != id).collect();
    assert!(saved.iter().all(|t| t.priority == Priority::High));
    assert!(saved
        .iter()
        .all(|t| t.note.as_deref() == Some(&format!("from task {}", id)[..])));
}

#[test]
fn breakdown_without_save_leaves_store_untouched() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_task(&conn, "Plan the move", Priority::Medium, None, None).unwrap();
    let assistant = CannedAssistant {
        reply: "[\"Book movers\"]".into(),
    };
    assist::run_breakdown(&conn, id, false, &assistant).unwrap();
    assert_eq!(store::list_tasks(&conn, false).unwrap().len(), 1);
}

#[test]
fn prioritize_orders_open_tasks_by_model_ranking() {
    let conn = db::open_in_memory().unwrap();
    let a = store::add_task(&conn, "Water plants", Priority::Low, None, None).unwrap();
    let b = store::add_task(&conn, "File taxes", Priority::High, None, None).unwrap();
    let assistant = CannedAssistant {
        reply: format!("[{}, {}]", b, a),
    };

    let ranked = assist::run_prioritize(&conn, &assistant).unwrap();
    assert_eq!(ranked[0].id, b);
    assert_eq!(ranked[1].id, a);
}

#[test]
fn prioritize_with_no_open_tasks_skips_the_model() {
    struct PanickyAssistant;
    impl Assistant for PanickyAssistant {
        fn complete(&self, _prompt: &str) -> Result<String, AssistError> {
            panic!("must not be called");
        }
    }
    let conn = db::open_in_memory().unwrap();
    let ranked = assist::run_prioritize(&conn, &PanickyAssistant).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn schema_errors_surface_not_panic() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_task(&conn, "Plan", Priority::Medium, None, None).unwrap();
    let assistant = CannedAssistant {
        reply: "I cannot help with that.".into(),
    };
    assert!(assist::run_breakdown(&conn, id, false, &assistant).is_err());
}

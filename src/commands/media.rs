// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{MediaKind, MediaStatus, MediaUpdate};
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let title = sub.get_one::<String>("title").unwrap();
            let kind = sub.get_one::<String>("kind").unwrap().parse::<MediaKind>()?;
            let id = store::add_media(conn, title, kind)?;
            println!("Added {} {} '{}'", kind.as_str(), id, title);
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("set", sub)) => set(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_media(conn, id)?;
            println!("Removed media item {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let up = MediaUpdate {
        title: sub.get_one::<String>("title").cloned(),
        kind: match sub.get_one::<String>("kind") {
            Some(s) => Some(s.parse::<MediaKind>()?),
            None => None,
        },
        status: match sub.get_one::<String>("status") {
            Some(s) => Some(s.parse::<MediaStatus>()?),
            None => None,
        },
        rating: sub.get_one::<u8>("rating").copied(),
    };
    store::update_media(conn, id, &up)?;
    println!("Updated media item {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let status = match sub.get_one::<String>("status") {
        Some(s) => Some(s.parse::<MediaStatus>()?),
        None => None,
    };
    let items = store::list_media(conn, status)?;
    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let rows = items
            .into_iter()
            .map(|i| {
                vec![
                    i.id.to_string(),
                    i.title,
                    i.kind.as_str().to_string(),
                    i.status.as_str().to_string(),
                    i.rating.map(|r| r.to_string()).unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Title", "Kind", "Status", "Rating"], rows)
        );
    }
    Ok(())
}

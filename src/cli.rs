// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Target month (defaults to the current month)")
}

pub fn build_cli() -> Command {
    Command::new("lifehub")
        .about("Habits, goals, tasks, calendar, finance, and watchlists in one place")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the database if missing"))
        .subcommand(
            Command::new("habit")
                .about("Track daily habits")
                .subcommand(
                    Command::new("add")
                        .about("Add a habit")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("started").long("started").value_name("YYYY-MM-DD")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List habits with streaks"),
                ))
                .subcommand(
                    Command::new("check")
                        .about("Check a habit off for a day")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a habit and its history")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Goals with step roll-ups")
                .subcommand(
                    Command::new("add")
                        .about("Add a goal")
                        .arg(Arg::new("title").required(true))
                        .arg(Arg::new("target").long("target").value_name("YYYY-MM-DD")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List goals with progress"),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit a goal")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("target").long("target").value_name("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("rm").about("Remove a goal").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("step")
                        .about("Manage goal steps")
                        .subcommand(
                            Command::new("add")
                                .about("Add a step to a goal")
                                .arg(
                                    Arg::new("goal-id")
                                        .required(true)
                                        .value_parser(value_parser!(i64)),
                                )
                                .arg(Arg::new("title").required(true)),
                        )
                        .subcommand(
                            Command::new("done").about("Mark a step done").arg(
                                Arg::new("id")
                                    .required(true)
                                    .value_parser(value_parser!(i64)),
                            ),
                        )
                        .subcommand(json_flags(
                            Command::new("list").about("List steps of a goal").arg(
                                Arg::new("goal-id")
                                    .required(true)
                                    .value_parser(value_parser!(i64)),
                            ),
                        )),
                ),
        )
        .subcommand(
            Command::new("task")
                .about("Task list")
                .subcommand(
                    Command::new("add")
                        .about("Add a task")
                        .arg(Arg::new("title").required(true))
                        .arg(
                            Arg::new("priority")
                                .long("priority")
                                .value_name("low|medium|high")
                                .default_value("medium"),
                        )
                        .arg(Arg::new("due").long("due").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List open tasks").arg(
                        Arg::new("all")
                            .long("all")
                            .action(ArgAction::SetTrue)
                            .help("Include completed tasks"),
                    ),
                ))
                .subcommand(
                    Command::new("done").about("Complete a task").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a task")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("priority").long("priority"))
                        .arg(Arg::new("due").long("due").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm").about("Delete a task").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("calendar")
                .about("Dated events")
                .subcommand(
                    Command::new("add")
                        .about("Add an event")
                        .arg(Arg::new("title").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .required(true),
                        )
                        .arg(Arg::new("time").long("time").value_name("HH:MM"))
                        .arg(Arg::new("location").long("location")),
                )
                .subcommand(json_flags(
                    Command::new("agenda")
                        .about("Events for a month")
                        .arg(month_arg()),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit an event")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("time").long("time").value_name("HH:MM"))
                        .arg(Arg::new("location").long("location")),
                )
                .subcommand(
                    Command::new("rm").about("Remove an event").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Recurring income entries")
                .subcommand(
                    Command::new("add")
                        .about("Add an income entry")
                        .arg(Arg::new("source").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Effective date (defaults to today)"),
                        )
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .value_name("one-time|monthly|yearly")
                                .default_value("one-time"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(Command::new("list").about("List income entries")))
                .subcommand(
                    Command::new("edit")
                        .about("Edit an income entry")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("source").long("source"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("frequency").long("frequency"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm").about("Delete an income entry").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Recurring expense entries")
                .subcommand(
                    Command::new("add")
                        .about("Add an expense entry")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Effective date (defaults to today)"),
                        )
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .value_name("one-time|daily|monthly|yearly")
                                .default_value("one-time"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("other"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(Command::new("list").about("List expense entries")))
                .subcommand(
                    Command::new("edit")
                        .about("Edit an expense entry")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("frequency").long("frequency"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm").about("Delete an expense entry").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("media")
                .about("Watchlist and reading list")
                .subcommand(
                    Command::new("add")
                        .about("Add a media item")
                        .arg(Arg::new("title").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_name("movie|series|book|game")
                                .required(true),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List media items").arg(
                        Arg::new("status")
                            .long("status")
                            .value_name("planned|in-progress|done|dropped"),
                    ),
                ))
                .subcommand(
                    Command::new("set")
                        .about("Update a media item")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("kind").long("kind"))
                        .arg(Arg::new("status").long("status"))
                        .arg(
                            Arg::new("rating")
                                .long("rating")
                                .value_name("1-10")
                                .value_parser(value_parser!(u8).range(1..=10)),
                        ),
                )
                .subcommand(
                    Command::new("rm").about("Remove a media item").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Month-bucketed finance reports")
                .subcommand(json_flags(
                    Command::new("net")
                        .about("Income, expenses, and net for a month")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("by-category")
                        .about("Expense totals per category for a month")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("trend")
                        .about("Expense totals for trailing months")
                        .arg(month_arg())
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .default_value("6"),
                        ),
                )),
        )
        .subcommand(
            Command::new("assist")
                .about("AI-assisted flows")
                .subcommand(
                    Command::new("breakdown")
                        .about("Break a task into subtasks")
                        .arg(
                            Arg::new("task-id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("save")
                                .long("save")
                                .action(ArgAction::SetTrue)
                                .help("Save the subtasks as new tasks"),
                        ),
                )
                .subcommand(
                    Command::new("prioritize").about("Rank open tasks by urgency"),
                )
                .subcommand(
                    Command::new("weekly-review").about("Generate a weekly review"),
                )
                .subcommand(
                    Command::new("set-model")
                        .about("Choose the generative model")
                        .arg(Arg::new("model").required(true)),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("entries")
                    .about("Export income and expense entries")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .value_name("csv|json")
                            .required(true),
                    )
                    .arg(Arg::new("out").long("out").value_name("PATH").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check the store for inconsistencies"))
}

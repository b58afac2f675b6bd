// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

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

fn window_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("start")
            .long("start")
            .help("Window start day, YYYY-MM-DD (default: one year back)"),
    )
    .arg(
        Arg::new("end")
            .long("end")
            .help("Window end day, YYYY-MM-DD, inclusive (default: today)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("eventclip")
        .version(clap::crate_version!())
        .about("Event-based expense tracking against a remote expense API")
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Totals, calendar buckets, and the per-event breakdown"),
        ))
        .subcommand(
            Command::new("event")
                .about("Manage events")
                .subcommand(json_flags(window_args(
                    Command::new("list")
                        .about("List events with their running totals")
                        .arg(
                            Arg::new("query")
                                .long("query")
                                .help("Case-insensitive substring match on title/description"),
                        ),
                )))
                .subcommand(
                    Command::new("add")
                        .about("Create an event")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("When the event occurs, YYYY-MM-DD [HH:MM]"),
                        ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update an event; unspecified fields keep their value")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD [HH:MM]")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete an event")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(json_flags(window_args(
                    Command::new("show")
                        .about("One event with its expenses in the window")
                        .arg(Arg::new("id").required(true)),
                )))
                .subcommand(
                    Command::new("total")
                        .about("Server-side running total for an event")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Manage expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense against an event")
                        .arg(Arg::new("event").long("event").required(true).help("Event id"))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("spent-on")
                                .long("spent-on")
                                .help("When the cost was incurred, YYYY-MM-DD [HH:MM] (default: now)"),
                        ),
                )
                .subcommand(json_flags(window_args(
                    Command::new("list")
                        .about("List expenses in a day window")
                        .arg(
                            Arg::new("event")
                                .long("event")
                                .help("Only expenses referencing this event id"),
                        ),
                )))
                .subcommand(
                    Command::new("update")
                        .about("Replace an expense (all fields required)")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("event").long("event").required(true).help("Event id"))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("spent-on")
                                .long("spent-on")
                                .required(true)
                                .help("YYYY-MM-DD [HH:MM]"),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete an expense")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("expenses")
                    .about("Create expenses from CSV: date,event,description,amount")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                window_args(
                    Command::new("expenses")
                        .about("Dump fetched expenses to a file")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
            ),
        )
        .subcommand(
            Command::new("doctor")
                .about("Cross-check server totals and snapshots against client aggregation"),
        )
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(Command::new("show").about("Effective API URL and config path"))
                .subcommand(
                    Command::new("set-url")
                        .about("Persist the API base URL")
                        .arg(Arg::new("url").required(true)),
                ),
        )
}

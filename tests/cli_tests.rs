// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use eventclip::cli;

#[test]
fn expense_add_args_parse() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "eventclip",
        "expense",
        "add",
        "--event",
        "e1",
        "--description",
        "Dinner",
        "--amount",
        "42.50",
        "--spent-on",
        "2024-03-10",
    ]);
    let Some(("expense", exp_m)) = matches.subcommand() else {
        panic!("expense command not parsed");
    };
    let Some(("add", add_m)) = exp_m.subcommand() else {
        panic!("add subcommand not parsed");
    };
    assert_eq!(add_m.get_one::<String>("event").unwrap(), "e1");
    assert_eq!(add_m.get_one::<String>("description").unwrap(), "Dinner");
    assert_eq!(add_m.get_one::<String>("amount").unwrap(), "42.50");
    assert_eq!(add_m.get_one::<String>("spent-on").unwrap(), "2024-03-10");
}

#[test]
fn event_list_takes_query_and_json_flags() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["eventclip", "event", "list", "--query", "goa", "--json"]);
    let Some(("event", ev_m)) = matches.subcommand() else {
        panic!("event command not parsed");
    };
    let Some(("list", list_m)) = ev_m.subcommand() else {
        panic!("list subcommand not parsed");
    };
    assert_eq!(list_m.get_one::<String>("query").unwrap(), "goa");
    assert!(list_m.get_flag("json"));
    assert!(!list_m.get_flag("jsonl"));
}

#[test]
fn export_defaults_to_csv_format() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "eventclip",
        "export",
        "expenses",
        "--out",
        "/tmp/out.csv",
    ]);
    let Some(("export", ex_m)) = matches.subcommand() else {
        panic!("export command not parsed");
    };
    let Some(("expenses", sub)) = ex_m.subcommand() else {
        panic!("expenses subcommand not parsed");
    };
    assert_eq!(sub.get_one::<String>("format").unwrap(), "csv");
    assert_eq!(sub.get_one::<String>("out").unwrap(), "/tmp/out.csv");
}

#[test]
fn dashboard_accepts_window_free_invocation() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["eventclip", "dashboard", "--jsonl"]);
    let Some(("dashboard", sub)) = matches.subcommand() else {
        panic!("dashboard command not parsed");
    };
    assert!(sub.get_flag("jsonl"));
}

#[test]
fn expense_list_takes_inclusive_day_window() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "eventclip",
        "expense",
        "list",
        "--start",
        "2024-03-01",
        "--end",
        "2024-03-31",
        "--event",
        "e1",
    ]);
    let Some(("expense", exp_m)) = matches.subcommand() else {
        panic!("expense command not parsed");
    };
    let Some(("list", list_m)) = exp_m.subcommand() else {
        panic!("list subcommand not parsed");
    };
    assert_eq!(list_m.get_one::<String>("start").unwrap(), "2024-03-01");
    assert_eq!(list_m.get_one::<String>("end").unwrap(), "2024-03-31");
    assert_eq!(list_m.get_one::<String>("event").unwrap(), "e1");
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate;
use crate::api::ApiClient;
use crate::models::{Expense, ExpenseDraft};
use crate::utils::{
    fmt_amount, maybe_print_json, parse_amount, parse_datetime, pretty_table, range_window,
    zoned_to_utc,
};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(client, sub)?,
        Some(("list", sub)) => list(client, sub)?,
        Some(("update", sub)) => update(client, sub)?,
        Some(("delete", sub)) => delete(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn draft_from_args(sub: &clap::ArgMatches) -> Result<ExpenseDraft> {
    let event_id = sub.get_one::<String>("event").unwrap().trim().to_string();
    let description = sub
        .get_one::<String>("description")
        .unwrap()
        .trim()
        .to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap().trim())?;
    let spent_on = match sub.get_one::<String>("spent-on") {
        Some(raw) => zoned_to_utc(&Local, parse_datetime(raw.trim())?)?,
        None => Utc::now(),
    };
    Ok(ExpenseDraft {
        event_id,
        description,
        amount,
        spent_on,
    })
}

fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from_args(sub)?;
    let e = client.create_expense(&draft)?;
    println!(
        "Recorded {} for '{}' on {} (event: {})",
        fmt_amount(&e.amount),
        e.description,
        e.spent_on.with_timezone(&Local).format("%Y-%m-%d"),
        e.event.title
    );
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub spent_on: DateTime<Utc>,
    pub event: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

pub fn rows(expenses: &[Expense]) -> Vec<ExpenseRow> {
    expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.clone(),
            spent_on: e.spent_on,
            event: e.event.title.clone(),
            description: e.description.clone(),
            amount: e.amount,
        })
        .collect()
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let (start, end) = range_window(
        sub.get_one::<String>("start").map(String::as_str),
        sub.get_one::<String>("end").map(String::as_str),
    )?;
    let range = client.expenses_by_range(start, end)?;
    let expenses: Vec<Expense> = match sub.get_one::<String>("event") {
        Some(id) => range
            .expenses
            .into_iter()
            .filter(|e| e.event.id == id.trim())
            .collect(),
        None => range.expenses,
    };

    let data = rows(&expenses);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let table_rows = data
        .iter()
        .map(|r| {
            vec![
                r.spent_on
                    .with_timezone(&Local)
                    .format("%Y-%m-%d")
                    .to_string(),
                r.event.clone(),
                r.description.clone(),
                fmt_amount(&r.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Spent on", "Event", "Description", "Amount"], table_rows)
    );
    println!("Total: {}", fmt_amount(&aggregate::overall_total(&expenses)));
    Ok(())
}

fn update(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let draft = draft_from_args(sub)?;
    let e = client.update_expense(id, &draft)?;
    println!("Updated expense {} ({})", e.id, e.description);
    Ok(())
}

fn delete(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    client.delete_expense(id)?;
    println!("Deleted expense {}", id);
    Ok(())
}

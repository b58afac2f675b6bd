// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate;
use crate::api::ApiClient;
use crate::models::{EventDraft, Expense};
use crate::utils::{
    fmt_amount, maybe_print_json, parse_datetime, pretty_table, range_window, zoned_to_utc,
};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("add", sub)) => add(client, sub)?,
        Some(("update", sub)) => update(client, sub)?,
        Some(("delete", sub)) => delete(client, sub)?,
        Some(("show", sub)) => show(client, sub)?,
        Some(("total", sub)) => total(client, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct EventRow {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let query = sub.get_one::<String>("query").map(String::as_str).unwrap_or("");

    let events = client.list_events()?;
    let (start, end) = range_window(
        sub.get_one::<String>("start").map(String::as_str),
        sub.get_one::<String>("end").map(String::as_str),
    )?;
    let range = client.expenses_by_range(start, end)?;
    let totals: HashMap<String, Decimal> = aggregate::group_by_event(&range.expenses)
        .into_iter()
        .map(|g| (g.event_id, g.total))
        .collect();

    let data: Vec<EventRow> = aggregate::filter_events(&events, query)
        .into_iter()
        .map(|ev| EventRow {
            id: ev.id.clone(),
            title: ev.title.clone(),
            date: ev.date,
            description: ev.description.clone().unwrap_or_default(),
            total: totals.get(ev.id.as_str()).copied().unwrap_or(Decimal::ZERO),
        })
        .collect();

    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|r| {
            vec![
                r.title.clone(),
                r.date
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
                fmt_amount(&r.total),
                r.description.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Title", "When", "Spent", "Description"], rows)
    );
    Ok(())
}

fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string());
    let date_raw = sub.get_one::<String>("date").unwrap().trim();
    let date = zoned_to_utc(&Local, parse_datetime(date_raw)?)?;

    let ev = client.create_event(&EventDraft {
        title,
        description,
        date,
    })?;
    println!("Created event '{}' ({})", ev.title, ev.id);
    Ok(())
}

fn update(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let current = client.get_event(id)?;

    let title = match sub.get_one::<String>("title") {
        Some(t) => t.trim().to_string(),
        None => current.title,
    };
    let description = match sub.get_one::<String>("description") {
        Some(d) => Some(d.trim().to_string()),
        None => current.description,
    };
    let date = match sub.get_one::<String>("date") {
        Some(raw) => zoned_to_utc(&Local, parse_datetime(raw.trim())?)?,
        None => current.date,
    };

    let ev = client.update_event(
        id,
        &EventDraft {
            title,
            description,
            date,
        },
    )?;
    println!("Updated event '{}' ({})", ev.title, ev.id);
    Ok(())
}

fn delete(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    client.delete_event(id)?;
    println!("Deleted event {}", id);
    Ok(())
}

#[derive(Serialize)]
struct EventDetail {
    event: crate::models::Event,
    expenses: Vec<Expense>,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
}

fn show(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let id = sub.get_one::<String>("id").unwrap().trim();

    let event = client.get_event(id)?;
    let (start, end) = range_window(
        sub.get_one::<String>("start").map(String::as_str),
        sub.get_one::<String>("end").map(String::as_str),
    )?;
    let range = client.expenses_by_range(start, end)?;
    let expenses: Vec<Expense> = range
        .expenses
        .into_iter()
        .filter(|e| e.event.id == event.id)
        .collect();
    let total = aggregate::total_for_event(&expenses, &event.id);

    let detail = EventDetail {
        event,
        expenses,
        total,
    };
    if maybe_print_json(json_flag, jsonl_flag, &detail)? {
        return Ok(());
    }

    println!(
        "{} ({})",
        detail.event.title,
        detail
            .event
            .date
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );
    if let Some(desc) = &detail.event.description {
        println!("{}", desc);
    }
    let rows = detail
        .expenses
        .iter()
        .map(|e| {
            vec![
                e.spent_on
                    .with_timezone(&Local)
                    .format("%Y-%m-%d")
                    .to_string(),
                e.description.clone(),
                fmt_amount(&e.amount),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Spent on", "Description", "Amount"], rows));
    println!("Total: {}", fmt_amount(&detail.total));
    Ok(())
}

fn total(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let t = client
        .event_total(id)
        .with_context(|| format!("Total for event {}", id))?;
    println!("{}", fmt_amount(&t));
    Ok(())
}

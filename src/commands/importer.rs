// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::models::ExpenseDraft;
use crate::utils::{parse_amount, parse_datetime, zoned_to_utc};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => import_expenses(client, sub),
        _ => Ok(()),
    }
}

#[derive(Debug, PartialEq)]
pub struct CsvExpense {
    pub spent_on: NaiveDateTime,
    pub event: String,
    pub description: String,
    pub amount: Decimal,
}

/// Parse and validate every row before anything is sent to the server.
/// Columns: date,event,description,amount.
pub fn parse_rows<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<CsvExpense>> {
    let mut out = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim().to_string();
        let event = rec.get(1).context("event missing")?.trim().to_string();
        let description = rec.get(2).context("description missing")?.trim().to_string();
        let amount_raw = rec.get(3).context("amount missing")?.trim().to_string();

        let spent_on = parse_datetime(&date_raw)
            .with_context(|| format!("Invalid expense date '{}'", date_raw))?;
        let amount = parse_amount(&amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, description))?;
        if event.is_empty() {
            anyhow::bail!("Missing event title for {}", description);
        }

        out.push(CsvExpense {
            spent_on,
            event,
            description,
            amount,
        });
    }
    Ok(out)
}

fn import_expenses(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;
    let rows = parse_rows(&mut rdr)?;

    // Resolve event titles against the live event list before creating
    // anything; an unknown title rejects the whole file.
    let events = client.list_events()?;
    let mut by_title: HashMap<String, &str> = HashMap::new();
    for ev in &events {
        by_title
            .entry(ev.title.to_lowercase())
            .or_insert(ev.id.as_str());
    }

    let mut drafts = Vec::new();
    for row in &rows {
        let event_id = by_title
            .get(&row.event.to_lowercase())
            .with_context(|| format!("Event '{}' not found", row.event))?;
        drafts.push(ExpenseDraft {
            event_id: event_id.to_string(),
            description: row.description.clone(),
            amount: row.amount,
            spent_on: zoned_to_utc(&Local, row.spent_on)?,
        });
    }

    // The API has no transactions; rows created before a network failure
    // stay created, so say how far we got.
    let mut created = 0usize;
    for draft in &drafts {
        client
            .create_expense(draft)
            .with_context(|| format!("Import stopped after {} of {} rows", created, drafts.len()))?;
        created += 1;
    }
    println!("Imported {} expenses from {}", created, path);
    Ok(())
}

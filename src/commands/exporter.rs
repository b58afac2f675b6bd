// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::SecondsFormat;

use crate::api::ApiClient;
use crate::utils::{fmt_amount, range_window};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(client, sub),
        _ => Ok(()),
    }
}

fn export_expenses(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let (start, end) = range_window(
        sub.get_one::<String>("start").map(String::as_str),
        sub.get_one::<String>("end").map(String::as_str),
    )?;
    let range = client.expenses_by_range(start, end)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Open output {}", out))?;
            wtr.write_record(["spentOn", "event", "description", "amount", "createdAt"])?;
            for e in &range.expenses {
                wtr.write_record([
                    e.spent_on.to_rfc3339_opts(SecondsFormat::Millis, true),
                    e.event.title.clone(),
                    e.description.clone(),
                    fmt_amount(&e.amount),
                    e.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&range.expenses)?)
                .with_context(|| format!("Write output {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} expenses to {}", range.expenses.len(), out);
    Ok(())
}

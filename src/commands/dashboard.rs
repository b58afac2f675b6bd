// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{self, EventGroup};
use crate::api::ApiClient;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table, trailing_year};

#[derive(Serialize)]
pub struct DashboardSummary {
    pub total_events: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub month_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub year_total: Decimal,
    pub by_event: Vec<EventGroup>,
}

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let events = client.list_events()?;
    let (start, end) = trailing_year(Utc::now())?;
    let range = client.expenses_by_range(start, end)?;
    let expenses = range.expenses;

    // Month/year buckets follow the zone carried by `now`
    let now = Local::now();
    let summary = DashboardSummary {
        total_events: events.len(),
        total_expenses: aggregate::overall_total(&expenses),
        month_total: aggregate::current_month_total(&expenses, &now)?,
        year_total: aggregate::current_year_total(&expenses, &now)?,
        by_event: aggregate::group_by_event(&expenses),
    };

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Metric", "Value"],
            vec![
                vec!["Total events".into(), summary.total_events.to_string()],
                vec!["Total expenses".into(), fmt_amount(&summary.total_expenses)],
                vec!["This month".into(), fmt_amount(&summary.month_total)],
                vec!["This year".into(), fmt_amount(&summary.year_total)],
            ],
        )
    );
    let rows = summary
        .by_event
        .iter()
        .map(|g| vec![g.name.clone(), fmt_amount(&g.total)])
        .collect();
    println!("{}", pretty_table(&["Event", "Spent"], rows));
    Ok(())
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::aggregate;
use crate::api::ApiClient;
use crate::utils::{fmt_amount, pretty_table};

/// Cross-checks between server-side sums and the client-side recomputation,
/// over the full history (epoch..now on `spentOn`).
pub fn handle(client: &ApiClient) -> Result<()> {
    let mut rows = Vec::new();

    let events = client.list_events()?;
    let range = client.expenses_by_range(DateTime::UNIX_EPOCH, Utc::now())?;

    // 1) Server range total vs client recomputation. The server total comes
    // across as a JSON number, so compare at cent precision.
    let client_total = aggregate::overall_total(&range.expenses);
    if client_total.round_dp(2) != range.total.round_dp(2) {
        rows.push(vec![
            "range_total_mismatch".into(),
            format!(
                "server {} vs client {}",
                fmt_amount(&range.total),
                fmt_amount(&client_total)
            ),
        ]);
    }

    // 2) Per-event server totals vs the client grouping
    for ev in &events {
        let server = client.event_total(&ev.id)?;
        let local = aggregate::total_for_event(&range.expenses, &ev.id);
        if server.round_dp(2) != local.round_dp(2) {
            rows.push(vec![
                "event_total_mismatch".into(),
                format!(
                    "{}: server {} vs client {}",
                    ev.title,
                    fmt_amount(&server),
                    fmt_amount(&local)
                ),
            ]);
        }
    }

    // 3) Amounts are non-negative by contract
    for e in &range.expenses {
        if e.amount < Decimal::ZERO {
            rows.push(vec![
                "negative_amount".into(),
                format!("expense {} ({})", e.id, fmt_amount(&e.amount)),
            ]);
        }
    }

    // 4) Embedded snapshots are frozen at expense creation time; report
    // drift against the live event, never rewrite it.
    let titles: HashMap<&str, &str> = events
        .iter()
        .map(|ev| (ev.id.as_str(), ev.title.as_str()))
        .collect();
    for e in &range.expenses {
        match titles.get(e.event.id.as_str()) {
            Some(current) if *current != e.event.title => rows.push(vec![
                "stale_snapshot".into(),
                format!(
                    "expense {} says '{}', event is now '{}'",
                    e.id, e.event.title, current
                ),
            ]),
            None => rows.push(vec![
                "orphan_snapshot".into(),
                format!("expense {} references deleted event '{}'", e.id, e.event.title),
            ]),
            _ => {}
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

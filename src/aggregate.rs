// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Event, Expense};

/// Sum of amounts for expenses whose embedded snapshot references `event_id`.
/// Empty or non-matching input yields zero.
pub fn total_for_event(expenses: &[Expense], event_id: &str) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.event.id == event_id)
        .map(|e| e.amount)
        .sum()
}

pub fn overall_total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventGroup {
    pub event_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Running total per referenced event, keyed by snapshot id and labeled with
/// the snapshot title. Groups appear in first-occurrence order of their event
/// id in the input; events with no expenses are absent.
pub fn group_by_event(expenses: &[Expense]) -> Vec<EventGroup> {
    let mut groups: Vec<EventGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for e in expenses {
        match index.get(e.event.id.as_str()) {
            Some(&i) => groups[i].total += e.amount,
            None => {
                index.insert(e.event.id.as_str(), groups.len());
                groups.push(EventGroup {
                    event_id: e.event.id.clone(),
                    name: e.event.title.clone(),
                    total: e.amount,
                });
            }
        }
    }
    groups
}

/// Sum of amounts for expenses whose `spent_on` falls within `[start, end]`,
/// both endpoints inclusive. An inverted range (`start > end`) is empty and
/// yields zero.
pub fn total_in_range(expenses: &[Expense], start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    if start > end {
        return Decimal::ZERO;
    }
    expenses
        .iter()
        .filter(|e| e.spent_on >= start && e.spent_on <= end)
        .map(|e| e.amount)
        .sum()
}

/// First and last instant of the calendar month containing `now`, computed in
/// the zone `now` carries and returned as UTC instants.
pub fn month_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let tz = now.timezone();
    let (y, m) = (now.year(), now.month());
    let start = first_instant(&tz, y, m)?;
    let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    let next = first_instant(&tz, ny, nm)?;
    Ok((start, next - Duration::nanoseconds(1)))
}

/// First and last instant of the calendar year containing `now`.
pub fn year_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let tz = now.timezone();
    let start = first_instant(&tz, now.year(), 1)?;
    let next = first_instant(&tz, now.year() + 1, 1)?;
    Ok((start, next - Duration::nanoseconds(1)))
}

fn first_instant<Tz: TimeZone>(tz: &Tz, year: i32, month: u32) -> Result<DateTime<Utc>> {
    let local = tz
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .earliest()
        .with_context(|| format!("No first instant for {:04}-{:02} in this zone", year, month))?;
    Ok(local.with_timezone(&Utc))
}

pub fn current_month_total<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> Result<Decimal> {
    let (start, end) = month_bounds(now)?;
    Ok(total_in_range(expenses, start, end))
}

pub fn current_year_total<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> Result<Decimal> {
    let (start, end) = year_bounds(now)?;
    Ok(total_in_range(expenses, start, end))
}

/// Events whose title or description contains `query` as a case-insensitive
/// substring. An absent description never matches a non-empty query; the
/// empty query matches every event. Plain containment, not tokenized search.
pub fn filter_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|ev| {
            ev.title.to_lowercase().contains(&needle)
                || ev
                    .description
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

const UA: &str = concat!(
    "eventclip/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/eventclip)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Accepts `YYYY-MM-DD HH:MM[:SS]` (space or `T` separator) or a bare date,
/// which reads as midnight.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    bail!("Invalid date/time '{}', expected YYYY-MM-DD [HH:MM[:SS]]", s)
}

pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = s
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    if d.is_sign_negative() && !d.is_zero() {
        bail!("Amount '{}' must be non-negative", s);
    }
    Ok(d)
}

/// Resolve a naive wall-clock time against `tz` into a UTC instant.
pub fn zoned_to_utc<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("Wall-clock time {} does not exist in this zone", naive))?;
    Ok(local.with_timezone(&Utc))
}

/// Inclusive day range `[start, end]` as UTC instants: midnight of `start` to
/// the last instant of `end`, both read in `tz`.
pub fn day_range<Tz: TimeZone>(
    tz: &Tz,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let from = zoned_to_utc(tz, start.and_time(NaiveTime::MIN))?;
    let next = end
        .succ_opt()
        .with_context(|| format!("Day after {} is out of range", end))?;
    let to = zoned_to_utc(tz, next.and_time(NaiveTime::MIN))? - Duration::nanoseconds(1);
    Ok((from, to))
}

/// Fetch window the dashboard and event pages use: the year ending at `now`.
pub fn trailing_year(now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = now
        .checked_sub_months(Months::new(12))
        .with_context(|| format!("Cannot step one year back from {}", now))?;
    Ok((start, now))
}

/// Fetch window from optional `--start`/`--end` day arguments, read in the
/// local zone. Defaults: one year back, through now.
pub fn range_window(start: Option<&str>, end: Option<&str>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let now = Utc::now();
    let from = match start {
        Some(s) => zoned_to_utc(&Local, parse_date(s)?.and_time(NaiveTime::MIN))?,
        None => trailing_year(now)?.0,
    };
    let to = match end {
        Some(e) => {
            let day = parse_date(e)?;
            day_range(&Local, day, day)?.1
        }
        None => now,
    };
    Ok((from, to))
}

pub fn fmt_amount(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

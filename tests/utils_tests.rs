// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use eventclip::utils::{
    day_range, fmt_amount, parse_amount, parse_date, parse_datetime, trailing_year,
};
use rust_decimal::Decimal;

#[test]
fn parse_date_accepts_iso_days_only() {
    assert_eq!(
        parse_date("2024-03-10").unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    );
    let err = parse_date("10/03/2024").unwrap_err();
    assert!(err.to_string().contains("Invalid date '10/03/2024'"));
}

#[test]
fn parse_datetime_accepts_common_shapes() {
    let midnight = parse_datetime("2024-03-10").unwrap();
    assert_eq!(midnight.hour(), 0);
    assert_eq!(midnight.date().day(), 10);

    let spaced = parse_datetime("2024-03-10 19:30").unwrap();
    assert_eq!(spaced.minute(), 30);

    let t_sep = parse_datetime("2024-03-10T19:30:15").unwrap();
    assert_eq!(t_sep.second(), 15);

    assert!(parse_datetime("next tuesday").is_err());
}

#[test]
fn parse_amount_rejects_negatives() {
    assert_eq!(parse_amount("42.50").unwrap(), "42.50".parse::<Decimal>().unwrap());
    assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    let err = parse_amount("-5").unwrap_err();
    assert!(err.to_string().contains("must be non-negative"));
}

#[test]
fn day_range_is_inclusive_in_the_given_zone() {
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let (from, to) = day_range(&ist, start, end).unwrap();

    // Midnight March 1 IST is the previous evening in UTC.
    assert_eq!(from, Utc.with_ymd_and_hms(2024, 2, 29, 18, 30, 0).unwrap());
    // The window runs through the whole of March 31 IST.
    let last_in = Utc.with_ymd_and_hms(2024, 3, 31, 18, 29, 59).unwrap();
    let first_out = Utc.with_ymd_and_hms(2024, 3, 31, 18, 30, 0).unwrap();
    assert!(last_in <= to);
    assert!(first_out > to);
}

#[test]
fn trailing_year_clamps_leap_day() {
    let now = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
    let (start, end) = trailing_year(now).unwrap();
    assert_eq!(end, now);
    assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
}

#[test]
fn fmt_amount_pads_to_cents() {
    assert_eq!(fmt_amount(&"5".parse::<Decimal>().unwrap()), "5.00");
    assert_eq!(fmt_amount(&"42.505".parse::<Decimal>().unwrap()), "42.50");
    assert_eq!(fmt_amount(&"0.1".parse::<Decimal>().unwrap()), "0.10");
}

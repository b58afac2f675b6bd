// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Cursor;

use chrono::NaiveDate;
use eventclip::commands::importer::parse_rows;
use rust_decimal::Decimal;

fn reader_for(content: &str) -> csv::Reader<Cursor<String>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(content.to_string()))
}

#[test]
fn parses_valid_rows_with_trimming() {
    let mut rdr = reader_for(
        "date,event,description,amount\n\
         2024-03-10,Trip to Goa,  Flights  ,500\n\
         2024-03-12 19:30, Trip to Goa ,Dinner,42.50\n",
    );
    let rows = parse_rows(&mut rdr).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(
        rows[0].spent_on.date(),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    );
    assert_eq!(rows[0].event, "Trip to Goa");
    assert_eq!(rows[0].description, "Flights");
    assert_eq!(rows[0].amount, "500".parse::<Decimal>().unwrap());

    assert_eq!(rows[1].spent_on.format("%H:%M").to_string(), "19:30");
    assert_eq!(rows[1].event, "Trip to Goa");
    assert_eq!(rows[1].amount, "42.50".parse::<Decimal>().unwrap());
}

#[test]
fn rejects_invalid_date() {
    let mut rdr = reader_for("date,event,description,amount\n2024-13-01,Trip,Flights,10\n");
    let err = parse_rows(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("Invalid expense date '2024-13-01'"));
}

#[test]
fn rejects_invalid_amount() {
    let mut rdr = reader_for("date,event,description,amount\n2024-03-10,Trip,Flights,abc\n");
    let err = parse_rows(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("Invalid amount 'abc' for Flights"));
}

#[test]
fn rejects_negative_amount() {
    let mut rdr = reader_for("date,event,description,amount\n2024-03-10,Trip,Refund,-5\n");
    let err = parse_rows(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("must be non-negative"));
}

#[test]
fn rejects_missing_event_title() {
    let mut rdr = reader_for("date,event,description,amount\n2024-03-10,,Flights,10\n");
    let err = parse_rows(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("Missing event title for Flights"));
}

#[test]
fn a_bad_row_rejects_the_whole_file() {
    let mut rdr = reader_for(
        "date,event,description,amount\n\
         2024-03-10,Trip,Flights,10\n\
         2024-03-11,Trip,Hotel,bad\n",
    );
    // Validation happens before any network call, so one bad row means
    // nothing gets created.
    assert!(parse_rows(&mut rdr).is_err());
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use eventclip::models::{ApiErrorBody, Event, EventDraft, Expense, ExpenseDraft, RangeExpenses};
use rust_decimal::Decimal;

#[test]
fn expense_decodes_with_embedded_snapshot() {
    let raw = r#"{
        "_id": "x1",
        "eventId": {
            "_id": "e1",
            "title": "Trip to Goa",
            "description": "Beach week",
            "date": "2024-03-15T18:00:00.000Z",
            "createdAt": "2024-01-01T00:00:00.000Z"
        },
        "description": "Flights",
        "amount": 12.5,
        "spentOn": "2024-03-10T00:00:00.000Z",
        "createdAt": "2024-03-10T12:00:00.000Z"
    }"#;
    let e: Expense = serde_json::from_str(raw).unwrap();
    assert_eq!(e.id, "x1");
    assert_eq!(e.event.id, "e1");
    assert_eq!(e.event.title, "Trip to Goa");
    assert_eq!(e.amount, "12.5".parse::<Decimal>().unwrap());
    assert_eq!(e.spent_on, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
}

#[test]
fn event_description_is_optional() {
    let raw = r#"{
        "_id": "e1",
        "title": "Trip",
        "date": "2024-03-15T18:00:00.000Z",
        "createdAt": "2024-01-01T00:00:00.000Z"
    }"#;
    let ev: Event = serde_json::from_str(raw).unwrap();
    assert!(ev.description.is_none());
}

#[test]
fn expense_draft_sends_plain_event_id_and_numeric_amount() {
    let draft = ExpenseDraft {
        event_id: "e1".into(),
        description: "Dinner".into(),
        amount: "42.5".parse().unwrap(),
        spent_on: Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap(),
    };
    let v = serde_json::to_value(&draft).unwrap();
    assert_eq!(v["eventId"], serde_json::json!("e1"));
    assert_eq!(v["amount"], serde_json::json!(42.5));
    assert!(v["spentOn"].as_str().unwrap().starts_with("2024-03-10T"));
}

#[test]
fn event_draft_omits_absent_description() {
    let draft = EventDraft {
        title: "Trip".into(),
        description: None,
        date: Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap(),
    };
    let v = serde_json::to_value(&draft).unwrap();
    assert!(v.get("description").is_none());
    assert_eq!(v["title"], serde_json::json!("Trip"));
}

#[test]
fn range_response_carries_server_total() {
    let raw = r#"{
        "expenses": [],
        "total": 150.25
    }"#;
    let r: RangeExpenses = serde_json::from_str(raw).unwrap();
    assert!(r.expenses.is_empty());
    assert_eq!(r.total, "150.25".parse::<Decimal>().unwrap());
}

#[test]
fn api_error_body_decodes_field_errors() {
    let raw = r#"{
        "message": "Validation failed",
        "errors": [{ "msg": "Title is required", "param": "title" }]
    }"#;
    let b: ApiErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(b.message, "Validation failed");
    let errors = b.errors.unwrap();
    assert_eq!(errors[0].param, "title");
}

#[test]
fn api_error_body_tolerates_missing_errors() {
    let b: ApiErrorBody = serde_json::from_str(r#"{ "message": "Event not found" }"#).unwrap();
    assert!(b.errors.is_none());
}

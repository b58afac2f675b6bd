// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Copy of an event's fields frozen into an expense at creation/update time.
/// The server does not refresh it when the event is later edited, and neither
/// do we.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "eventId")]
    pub event: EventSnapshot,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub spent_on: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Payload for POST/PUT /events.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

/// Payload for POST/PUT /expenses. The event reference goes up as a plain id
/// string; the server builds the embedded snapshot from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub event_id: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub spent_on: DateTime<Utc>,
}

/// Response of GET /expenses/by-date. `total` is the server's own sum over
/// the returned range; `doctor` compares it against the client recomputation.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeExpenses {
    pub expenses: Vec<Expense>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Response of GET /events/{id}/total.
#[derive(Debug, Clone, Deserialize)]
pub struct TotalResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
}

/// Error body the backend sends on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::{Client, Response};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    ApiErrorBody, Event, EventDraft, Expense, ExpenseDraft, RangeExpenses, TotalResponse,
};
use crate::utils::http_client;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Blocking client over the expense-tracker REST backend. One method per
/// endpoint; no retries, no local caching of responses.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            http: http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config() -> Result<Self> {
        Self::new(crate::config::api_url()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map non-2xx responses into the backend's `{ message, errors }` shape.
    fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body: Option<ApiErrorBody> = resp.json().ok();
        match body {
            Some(b) => match b.errors.filter(|e| !e.is_empty()) {
                Some(errors) => {
                    let detail = errors
                        .iter()
                        .map(|e| format!("{}: {}", e.param, e.msg))
                        .collect::<Vec<_>>()
                        .join("; ");
                    Err(RemoteError::Validation(detail).into())
                }
                None => Err(RemoteError::Api {
                    status: status.as_u16(),
                    message: b.message,
                }
                .into()),
            },
            None => Err(RemoteError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            }
            .into()),
        }
    }

    pub fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(self.url("/events"))
            .send()
            .context("GET /events")?;
        Self::check(resp)?.json().context("Decode event list")
    }

    pub fn get_event(&self, id: &str) -> Result<Event> {
        let resp = self
            .http
            .get(self.url(&format!("/events/{}", id)))
            .send()
            .with_context(|| format!("GET /events/{}", id))?;
        Self::check(resp)?.json().context("Decode event")
    }

    pub fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        let resp = self
            .http
            .post(self.url("/events"))
            .json(draft)
            .send()
            .context("POST /events")?;
        Self::check(resp)?.json().context("Decode created event")
    }

    pub fn update_event(&self, id: &str, draft: &EventDraft) -> Result<Event> {
        let resp = self
            .http
            .put(self.url(&format!("/events/{}", id)))
            .json(draft)
            .send()
            .with_context(|| format!("PUT /events/{}", id))?;
        Self::check(resp)?.json().context("Decode updated event")
    }

    pub fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/events/{}", id)))
            .send()
            .with_context(|| format!("DELETE /events/{}", id))?;
        Self::check(resp)?;
        Ok(())
    }

    /// Server-side running total for one event.
    pub fn event_total(&self, id: &str) -> Result<Decimal> {
        let resp = self
            .http
            .get(self.url(&format!("/events/{}/total", id)))
            .send()
            .with_context(|| format!("GET /events/{}/total", id))?;
        let t: TotalResponse = Self::check(resp)?.json().context("Decode event total")?;
        Ok(t.total)
    }

    pub fn create_expense(&self, draft: &ExpenseDraft) -> Result<Expense> {
        let resp = self
            .http
            .post(self.url("/expenses"))
            .json(draft)
            .send()
            .context("POST /expenses")?;
        Self::check(resp)?.json().context("Decode created expense")
    }

    /// Expenses whose `spentOn` falls in `[start, end]`, filtered server-side,
    /// together with the server's own sum.
    pub fn expenses_by_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<RangeExpenses> {
        let resp = self
            .http
            .get(self.url("/expenses/by-date"))
            .query(&[
                ("start", start.to_rfc3339_opts(SecondsFormat::Millis, true)),
                ("end", end.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ])
            .send()
            .context("GET /expenses/by-date")?;
        Self::check(resp)?.json().context("Decode expense range")
    }

    pub fn update_expense(&self, id: &str, draft: &ExpenseDraft) -> Result<Expense> {
        let resp = self
            .http
            .put(self.url(&format!("/expenses/{}", id)))
            .json(draft)
            .send()
            .with_context(|| format!("PUT /expenses/{}", id))?;
        Self::check(resp)?.json().context("Decode updated expense")
    }

    pub fn delete_expense(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/expenses/{}", id)))
            .send()
            .with_context(|| format!("DELETE /expenses/{}", id))?;
        Self::check(resp)?;
        Ok(())
    }
}

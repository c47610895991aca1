// SPDX-License-Identifier: MIT

//! Client for the remote national-holiday feed.
//!
//! The feed is a JSON document keyed by year, then by ISO date, with each
//! record carrying its own `dd-mm-yyyy` date field. Year buckets also hold
//! non-holiday metadata entries (author, link), so individual records are
//! parsed leniently and skipped when they do not fit.

use crate::error::AppError;
use crate::holidays::{fallback_holidays, HolidayCalendar};
use crate::models::{Holiday, HolidayFeedRecord};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Holiday feed client.
#[derive(Clone)]
pub struct HolidayFeedClient {
    http: reqwest::Client,
    feed_url: String,
}

impl HolidayFeedClient {
    pub fn new(feed_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            feed_url,
        }
    }

    /// Fetch and parse the feed. Only national holidays are returned.
    pub async fn fetch(&self) -> Result<Vec<Holiday>, AppError> {
        let response = self
            .http
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| AppError::HolidayFeed(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::HolidayFeed(e.to_string()))?;

        let body: HashMap<String, Value> = response
            .json()
            .await
            .map_err(|e| AppError::HolidayFeed(format!("Invalid feed body: {}", e)))?;

        Ok(parse_feed(&body))
    }

    /// Build a holiday calendar from the feed, merged over the embedded
    /// fallback table so known holidays survive incomplete feeds.
    ///
    /// Fails closed: any fetch or parse error degrades to the fallback
    /// alone rather than an empty calendar or an error to the caller.
    pub async fn load_calendar(&self, ttl: Duration) -> HolidayCalendar {
        match self.fetch().await {
            Ok(fetched) => {
                tracing::info!(count = fetched.len(), "Loaded holidays from feed");
                let mut holidays = fallback_holidays();
                holidays.extend(fetched);
                HolidayCalendar::new(holidays, ttl)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Holiday feed unavailable, using fallback table");
                HolidayCalendar::with_fallback(ttl)
            }
        }
    }
}

/// Extract national holidays from a decoded feed document.
pub fn parse_feed(body: &HashMap<String, Value>) -> Vec<Holiday> {
    let mut holidays = Vec::new();

    for year_entry in body.values() {
        let Some(records) = year_entry.as_object() else {
            continue;
        };
        for record_value in records.values() {
            let Ok(record) =
                serde_json::from_value::<HolidayFeedRecord>(record_value.clone())
            else {
                continue; // metadata entry, not a holiday
            };
            if !record.is_national_holiday {
                continue;
            }
            match record.parse_date() {
                Ok(date) => holidays.push(Holiday {
                    date,
                    name: record.holiday_name,
                    is_national_holiday: true,
                }),
                Err(e) => {
                    tracing::debug!(
                        date = %record.holiday_date,
                        error = %e,
                        "Skipping holiday record with unparseable date"
                    );
                }
            }
        }
    }

    holidays
}

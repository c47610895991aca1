// SPDX-License-Identifier: MIT

//! Kalender API: agenda calendar backend.
//!
//! Serves a month calendar annotated with activities and Indonesian public
//! holidays, a per-day agenda, and a filtered/sorted activity listing. The
//! calendar module holds the pure bucketing/band/formatting core; the rest
//! is the HTTP shell around it.

pub mod calendar;
pub mod config;
pub mod db;
pub mod error;
pub mod holidays;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::ActivityStore;
use holidays::HolidayCalendar;
use services::HolidayFeedClient;
use tokio::sync::RwLock;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ActivityStore,
    pub holiday_feed: HolidayFeedClient,
    pub holidays: RwLock<HolidayCalendar>,
}

// SPDX-License-Identifier: MIT

use chrono::{NaiveDate, NaiveDateTime};
use kalender_api::config::Config;
use kalender_api::db::ActivityStore;
use kalender_api::holidays::HolidayCalendar;
use kalender_api::models::{Activity, ActivityLabel, ActivityLocation};
use kalender_api::routes::create_router;
use kalender_api::services::HolidayFeedClient;
use kalender_api::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Create a test app with the fallback holiday calendar and an empty store.
/// The feed URL points at an unroutable port, so a cache refresh (which
/// only happens if the long test TTL somehow expires) still degrades to the
/// fallback instead of touching the network.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let holiday_feed = HolidayFeedClient::new(config.holiday_feed_url.clone());
    let holidays = HolidayCalendar::with_fallback(Duration::from_secs(3600));

    let state = Arc::new(AppState {
        config,
        store: ActivityStore::new(),
        holiday_feed,
        holidays: RwLock::new(holidays),
    });

    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

/// A well-formed activity with fixed metadata for bucketing/band tests.
#[allow(dead_code)]
pub fn activity(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Activity {
    Activity {
        id: Uuid::new_v4(),
        title: title.to_string(),
        start_time: start,
        end_time: end,
        description: String::new(),
        label: ActivityLabel::Ro1,
        location: ActivityLocation::Kantor,
        created_by: "tester@example.com".to_string(),
    }
}

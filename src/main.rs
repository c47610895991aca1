// SPDX-License-Identifier: MIT

//! Kalender API Server
//!
//! Backend for the agenda calendar: activity CRUD, day agendas, the month
//! grid with multi-day bands, and the national-holiday overlay.

use kalender_api::{
    config::Config, db::ActivityStore, services::HolidayFeedClient, AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Kalender API");

    let store = ActivityStore::new();

    // Load the holiday overlay once at startup; the feed client degrades to
    // the embedded fallback table if the feed is unreachable.
    let holiday_feed = HolidayFeedClient::new(config.holiday_feed_url.clone());
    let ttl = Duration::from_secs(config.holiday_ttl_minutes * 60);
    let holidays = holiday_feed.load_calendar(ttl).await;
    tracing::info!(count = holidays.len(), "Holiday calendar loaded");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        holiday_feed,
        holidays: RwLock::new(holidays),
    });

    // Build router
    let app = kalender_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kalender_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

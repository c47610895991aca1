// SPDX-License-Identifier: MIT

//! API routes: activity CRUD, day agenda, calendar month grid, holidays.

use crate::calendar::{
    activities_for_day, band_flags, duration_minutes, format_day_and_date, format_duration,
    format_month_and_year, format_time, BandFlags, DayIndex,
};
use crate::error::{AppError, Result};
use crate::holidays::{is_weekend, HolidayCalendar};
use crate::models::{Activity, ActivityLabel, ActivityLocation, CreateActivity, UpdateActivity};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Duration as ChronoDuration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLockReadGuard;
use uuid::Uuid;

/// Maximum label dots rendered per calendar cell.
const MAX_CELL_LABELS: usize = 3;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
        .route("/api/activities/{id}/duplicate", post(duplicate_activity))
        .route("/api/agenda/{date}", get(get_agenda))
        .route("/api/calendar/{year}/{month}", get(get_calendar_month))
        .route("/api/holidays", get(get_holidays))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum SortField {
    Title,
    StartTime,
    EndTime,
    Label,
    Location,
}

#[derive(Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Free-text search over title, location, and label
    q: Option<String>,
    /// Filter by label (e.g. "RO 1")
    label: Option<ActivityLabel>,
    /// Filter by location (e.g. "Luar Kota")
    location: Option<ActivityLocation>,
    sort: Option<SortField>,
    #[serde(default)]
    order: SortOrder,
}

#[derive(Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
    pub total: usize,
}

/// The tabular view: all activities, filtered and sorted.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<ActivitiesResponse>> {
    let mut activities = state.store.list();

    // Case-insensitive substring search; a blank term matches everything.
    if let Some(term) = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    {
        let term = term.to_lowercase();
        activities.retain(|a| {
            a.title.to_lowercase().contains(&term)
                || a.location.as_str().to_lowercase().contains(&term)
                || a.label.as_str().to_lowercase().contains(&term)
        });
    }

    if let Some(label) = params.label {
        activities.retain(|a| a.label == label);
    }
    if let Some(location) = params.location {
        activities.retain(|a| a.location == location);
    }

    let field = params.sort.unwrap_or(SortField::StartTime);
    activities.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        match params.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = activities.len();
    Ok(Json(ActivitiesResponse { activities, total }))
}

fn compare_by(field: SortField, a: &Activity, b: &Activity) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::StartTime => a.start_time.cmp(&b.start_time),
        SortField::EndTime => a.end_time.cmp(&b.end_time),
        SortField::Label => a.label.as_str().cmp(b.label.as_str()),
        SortField::Location => a
            .location
            .as_str()
            .to_lowercase()
            .cmp(&b.location.as_str().to_lowercase()),
    }
}

/// Create a new activity.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateActivity>,
) -> Result<(StatusCode, Json<Activity>)> {
    use validator::Validate;
    payload.validate()?;

    let activity = state.store.create(payload);
    tracing::info!(id = %activity.id, title = %activity.title, "Activity created");
    Ok((StatusCode::CREATED, Json(activity)))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Activity>> {
    state
        .store
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
}

/// Partial update of an existing activity.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateActivity>,
) -> Result<Json<Activity>> {
    let activity = state.store.update(id, payload)?;
    tracing::info!(id = %id, "Activity updated");
    Ok(Json(activity))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.store.delete(id)?;
    tracing::info!(id = %id, "Activity deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct DuplicateRequest {
    /// Day the copy lands on; time-of-day and duration carry over.
    date: NaiveDate,
}

async fn duplicate_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DuplicateRequest>,
) -> Result<(StatusCode, Json<Activity>)> {
    let copy = state.store.duplicate(id, payload.date)?;
    tracing::info!(source = %id, copy = %copy.id, "Activity duplicated");
    Ok((StatusCode::CREATED, Json(copy)))
}

// ─── Day Agenda ──────────────────────────────────────────────

#[derive(Serialize)]
pub struct AgendaActivity {
    #[serde(flatten)]
    pub activity: Activity,
    /// "HH:MM" start time for the list row.
    pub start_label: String,
    /// "2 jam 15 menit" style duration.
    pub duration_label: String,
}

#[derive(Serialize)]
pub struct AgendaResponse {
    pub date: NaiveDate,
    /// "Senin, 10 Maret 2025"
    pub heading: String,
    pub total: usize,
    pub activities: Vec<AgendaActivity>,
}

/// Activities bucketed onto one day, sorted by start time.
async fn get_agenda(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<AgendaResponse>> {
    let snapshot = state.store.list();
    let mut bucketed: Vec<Activity> = activities_for_day(&snapshot, date)
        .into_iter()
        .cloned()
        .collect();
    bucketed.sort_by_key(|a| a.start_time);

    let activities: Vec<AgendaActivity> = bucketed
        .into_iter()
        .map(|activity| AgendaActivity {
            start_label: format_time(activity.start_time),
            duration_label: format_duration(duration_minutes(
                activity.start_time,
                activity.end_time,
            )),
            activity,
        })
        .collect();

    Ok(Json(AgendaResponse {
        date,
        heading: format_day_and_date(date),
        total: activities.len(),
        activities,
    }))
}

// ─── Calendar Month ──────────────────────────────────────────

#[derive(Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    /// False for the leading/trailing days padding the week grid.
    pub in_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    pub is_holiday: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    pub has_activities: bool,
    /// Up to three label dots, bucket order.
    pub labels: Vec<ActivityLabel>,
    pub band: BandFlags,
}

#[derive(Serialize)]
pub struct CalendarMonthResponse {
    pub year: i32,
    pub month: u32,
    /// "Maret 2025"
    pub title: String,
    /// Monday-start weeks covering the month.
    pub weeks: Vec<Vec<CalendarCell>>,
}

/// The month grid. Bucketing is done once into a `DayIndex`; each cell then
/// resolves membership and band flags against its own day bucket.
async fn get_calendar_month(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<CalendarMonthResponse>> {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {}-{}", year, month)))?;

    let index = DayIndex::build(state.store.list());
    let holidays = refreshed_holidays(&state).await;
    let today = Local::now().date_naive();

    // Monday-start grid padded to full weeks around the month.
    let month_end = last_day_of_month(month_start);
    let grid_start =
        month_start - ChronoDuration::days(month_start.weekday().num_days_from_monday() as i64);
    let grid_end =
        month_end + ChronoDuration::days((6 - month_end.weekday().num_days_from_monday()) as i64);

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut day = grid_start;
    while day <= grid_end {
        let mut labels = index.labels_for(day);
        labels.truncate(MAX_CELL_LABELS);

        week.push(CalendarCell {
            date: day,
            day: day.day(),
            in_month: day.month() == month && day.year() == year,
            is_today: day == today,
            is_weekend: is_weekend(day),
            is_holiday: holidays.is_holiday(day),
            holiday_name: holidays.holiday_name(day).map(str::to_string),
            has_activities: index.has_activities(day),
            labels,
            band: band_flags(&index, day),
        });

        if week.len() == 7 {
            weeks.push(std::mem::take(&mut week));
        }
        day = day.succ_opt().ok_or_else(|| {
            AppError::BadRequest(format!("Month out of range: {}-{}", year, month))
        })?;
    }

    Ok(Json(CalendarMonthResponse {
        year,
        month,
        title: format_month_and_year(month_start),
        weeks,
    }))
}

fn last_day_of_month(month_start: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if month_start.month() == 12 {
        (month_start.year() + 1, 1)
    } else {
        (month_start.year(), month_start.month() + 1)
    };
    // The first of the next month always exists for in-range years.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|d| d - ChronoDuration::days(1))
        .unwrap_or(month_start)
}

// ─── Holidays ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HolidaysResponse {
    pub holidays: Vec<crate::models::Holiday>,
    pub total: usize,
}

/// The loaded holiday overlay, sorted by date.
async fn get_holidays(State(state): State<Arc<AppState>>) -> Result<Json<HolidaysResponse>> {
    let calendar = refreshed_holidays(&state).await;
    let holidays: Vec<crate::models::Holiday> =
        calendar.holidays().into_iter().cloned().collect();
    let total = holidays.len();
    Ok(Json(HolidaysResponse { holidays, total }))
}

/// Reload the holiday calendar through the feed client when the cache has
/// outlived its TTL. Degrades to the fallback table on feed failure, so
/// this never errors.
async fn refreshed_holidays(state: &AppState) -> RwLockReadGuard<'_, HolidayCalendar> {
    // Bind the expiry check so its read guard drops before we take the
    // write lock below.
    let expired = state.holidays.read().await.is_expired();
    if expired {
        let ttl = Duration::from_secs(state.config.holiday_ttl_minutes * 60);
        let fresh = state.holiday_feed.load_calendar(ttl).await;
        let mut guard = state.holidays.write().await;
        // Another request may have refreshed while we fetched; last write
        // wins, both are fresh.
        *guard = fresh;
    }
    state.holidays.read().await
}

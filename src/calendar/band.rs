// SPDX-License-Identifier: MIT

//! Multi-day band resolution for calendar cells.
//!
//! A spanning event renders as one continuous band across its days: a
//! left-capped start cell, uncapped middle cells, and a right-capped end
//! cell. A single-day event triggers none of the three and renders as a
//! plain dot. Each predicate is self-contained per `(date, activities)`
//! pair; no whole-month pass is assumed.

use crate::calendar::bucket::DayIndex;
use crate::models::Activity;
use chrono::NaiveDate;
use serde::Serialize;

// A malformed activity (end day before start day) degrades to a plain
// single-day entry on its start day, so none of these fire for it.
fn starts_band_on(activity: &Activity, date: NaiveDate) -> bool {
    activity.start_time.date() == date && activity.end_time.date() > date
}

fn ends_band_on(activity: &Activity, date: NaiveDate) -> bool {
    activity.end_time.date() == date && activity.start_time.date() < date
}

fn mid_band_on(activity: &Activity, date: NaiveDate) -> bool {
    activity.start_time.date() < date && date < activity.end_time.date()
}

/// True if some activity starts a multi-day span on `date`.
pub fn is_band_start(date: NaiveDate, activities: &[Activity]) -> bool {
    activities.iter().any(|a| starts_band_on(a, date))
}

/// True if some activity ends a multi-day span on `date`.
pub fn is_band_end(date: NaiveDate, activities: &[Activity]) -> bool {
    activities.iter().any(|a| ends_band_on(a, date))
}

/// True if `date` lies strictly inside some activity's span, touching
/// neither its start day nor its end day.
pub fn is_band_middle(date: NaiveDate, activities: &[Activity]) -> bool {
    activities.iter().any(|a| mid_band_on(a, date))
}

/// A cell's position within any multi-day band, resolved against a
/// pre-built day index. Flags are independent: a cell can simultaneously
/// end one event's band and start another's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandFlags {
    pub start: bool,
    pub middle: bool,
    pub end: bool,
}

/// Resolve band flags for one cell using only that day's bucket.
pub fn band_flags(index: &DayIndex, date: NaiveDate) -> BandFlags {
    let mut flags = BandFlags::default();
    for activity in index.activities_for(date) {
        flags.start |= starts_band_on(activity, date);
        flags.end |= ends_band_on(activity, date);
        flags.middle |= mid_band_on(activity, date);
    }
    flags
}

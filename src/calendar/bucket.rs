// SPDX-License-Identifier: MIT

//! Day bucketing: which activities belong to a given calendar date.

use crate::calendar::interval::{contains, end_of_day, start_of_day};
use crate::models::{Activity, ActivityLabel};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Activities belonging to `date`'s agenda, in input order.
///
/// An activity belongs to the date if it starts on it, or if it spans
/// multiple days and its interval intersects the day. A malformed activity
/// (`end_time < start_time`) degrades to start-day matching only, since its
/// inverted interval intersects nothing.
pub fn activities_for_day(activities: &[Activity], date: NaiveDate) -> Vec<&Activity> {
    let day_start = start_of_day(date);
    let day_end = end_of_day(date);

    activities
        .iter()
        .filter(|a| {
            if a.start_time.date() == date {
                return true;
            }
            if a.is_multi_day() {
                return contains(a.start_time, a.end_time, day_start)
                    || contains(a.start_time, a.end_time, day_end)
                    || (a.start_time <= day_start && a.end_time >= day_end);
            }
            false
        })
        .collect()
}

/// True if any activity belongs to `date`.
pub fn has_activities(activities: &[Activity], date: NaiveDate) -> bool {
    !activities_for_day(activities, date).is_empty()
}

/// A snapshot of activities pre-bucketed by calendar day.
///
/// Built once per month render so each of the ~42 cells answers membership
/// and band queries against its own small bucket instead of rescanning the
/// full collection.
pub struct DayIndex {
    activities: Vec<Activity>,
    buckets: HashMap<NaiveDate, Vec<usize>>,
}

impl DayIndex {
    /// Bucket every activity under each day of its span, start day through
    /// end day inclusive. Input order is preserved within a bucket.
    pub fn build(activities: Vec<Activity>) -> Self {
        let mut buckets: HashMap<NaiveDate, Vec<usize>> = HashMap::new();

        for (idx, activity) in activities.iter().enumerate() {
            for day in span_days(activity) {
                buckets.entry(day).or_default().push(idx);
            }
        }

        Self { activities, buckets }
    }

    pub fn activities_for(&self, date: NaiveDate) -> Vec<&Activity> {
        self.buckets
            .get(&date)
            .map(|idxs| idxs.iter().map(|&i| &self.activities[i]).collect())
            .unwrap_or_default()
    }

    pub fn has_activities(&self, date: NaiveDate) -> bool {
        self.buckets.contains_key(&date)
    }

    /// Label dots for a calendar cell, in bucket order.
    pub fn labels_for(&self, date: NaiveDate) -> Vec<ActivityLabel> {
        self.activities_for(date).iter().map(|a| a.label).collect()
    }
}

/// The span of calendar days an activity covers, endpoints inclusive.
/// An inverted span (`end_time` before `start_time`) collapses to the start
/// day, matching the bucketing policy's degradation.
pub fn span_days(activity: &Activity) -> impl Iterator<Item = NaiveDate> {
    let first = activity.start_time.date();
    let last = activity.end_time.date().max(first);
    let count = (last - first).num_days() + 1;
    (0..count).filter_map(move |offset| first.checked_add_signed(Duration::days(offset)))
}

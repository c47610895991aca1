// SPDX-License-Identifier: MIT

//! In-memory activity store.
//!
//! The snapshot handed to the calendar core comes from here. Snapshots are
//! by value; the core never holds a reference back into the store.

use crate::error::AppError;
use crate::models::{Activity, CreateActivity, UpdateActivity};
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Activity plus its creation sequence, so snapshots keep insertion order.
#[derive(Debug, Clone)]
struct StoredActivity {
    seq: u64,
    activity: Activity,
}

/// Thread-safe activity store.
#[derive(Clone, Default)]
pub struct ActivityStore {
    activities: Arc<DashMap<Uuid, StoredActivity>>,
    next_seq: Arc<AtomicU64>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, activity: Activity) -> Activity {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.activities.insert(
            activity.id,
            StoredActivity {
                seq,
                activity: activity.clone(),
            },
        );
        activity
    }

    /// Create a new activity from a validated payload.
    pub fn create(&self, payload: CreateActivity) -> Activity {
        let activity = Activity {
            id: Uuid::new_v4(),
            title: payload.title,
            start_time: payload.start_time,
            end_time: payload.end_time,
            description: payload.description,
            label: payload.label,
            location: payload.location,
            created_by: payload.created_by,
        };
        tracing::debug!(id = %activity.id, title = %activity.title, "Created activity");
        self.insert(activity)
    }

    pub fn get(&self, id: Uuid) -> Option<Activity> {
        self.activities.get(&id).map(|e| e.activity.clone())
    }

    /// Snapshot of all activities in insertion order.
    pub fn list(&self) -> Vec<Activity> {
        let mut all: Vec<StoredActivity> =
            self.activities.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|s| s.seq);
        all.into_iter().map(|s| s.activity).collect()
    }

    /// Apply a partial update. The merged result must still satisfy
    /// end-after-start; the calendar core tolerates violations, but the
    /// edit workflow is where they are rejected.
    pub fn update(&self, id: Uuid, update: UpdateActivity) -> Result<Activity, AppError> {
        let mut entry = self
            .activities
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        // Merge into a copy first: a rejected update must not leave partial
        // changes behind.
        let mut merged = entry.activity.clone();
        if let Some(title) = update.title {
            if title.is_empty() {
                return Err(AppError::Validation("title must not be empty".to_string()));
            }
            merged.title = title;
        }
        if let Some(start_time) = update.start_time {
            merged.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            merged.end_time = end_time;
        }
        if let Some(description) = update.description {
            merged.description = description;
        }
        if let Some(label) = update.label {
            merged.label = label;
        }
        if let Some(location) = update.location {
            merged.location = location;
        }

        if merged.end_time <= merged.start_time {
            return Err(AppError::Validation(
                "end_time must be after start_time".to_string(),
            ));
        }

        entry.activity = merged.clone();
        tracing::debug!(id = %id, "Updated activity");
        Ok(merged)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.activities
            .remove(&id)
            .map(|_| tracing::debug!(id = %id, "Deleted activity"))
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
    }

    /// Copy an activity onto another day: every field carries over except
    /// the id, and start/end are rewritten onto `target_day` keeping the
    /// original time-of-day and duration.
    pub fn duplicate(&self, id: Uuid, target_day: NaiveDate) -> Result<Activity, AppError> {
        let source = self
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        let duration = source.end_time - source.start_time;
        let start_time = target_day.and_time(source.start_time.time());
        let copy = Activity {
            id: Uuid::new_v4(),
            start_time,
            end_time: start_time + duration,
            ..source
        };
        tracing::debug!(source = %id, copy = %copy.id, day = %target_day, "Duplicated activity");
        Ok(self.insert(copy))
    }
}

// SPDX-License-Identifier: MIT

//! Activity model and create/update payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Categorical tag for an activity. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLabel {
    #[serde(rename = "RO 1")]
    Ro1,
    #[serde(rename = "RO 2")]
    Ro2,
    #[serde(rename = "RO 3")]
    Ro3,
}

impl ActivityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLabel::Ro1 => "RO 1",
            ActivityLabel::Ro2 => "RO 2",
            ActivityLabel::Ro3 => "RO 3",
        }
    }
}

impl fmt::Display for ActivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an activity takes place. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLocation {
    Kantor,
    Online,
    Jakarta,
    #[serde(rename = "Luar Kota")]
    LuarKota,
}

impl ActivityLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLocation::Kantor => "Kantor",
            ActivityLocation::Online => "Online",
            ActivityLocation::Jakarta => "Jakarta",
            ActivityLocation::LuarKota => "Luar Kota",
        }
    }
}

impl fmt::Display for ActivityLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled, time-boxed calendar entry.
///
/// Timestamps are local wall-clock with no offset stored; only the calendar
/// day component matters for bucketing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Assigned at creation, immutable.
    pub id: Uuid,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Free text, may be empty.
    pub description: String,
    pub label: ActivityLabel,
    pub location: ActivityLocation,
    /// Email of the user who created it (opaque at this layer).
    pub created_by: String,
}

impl Activity {
    /// True if start and end fall on different calendar days.
    pub fn is_multi_day(&self) -> bool {
        self.start_time.date() != self.end_time.date()
    }
}

/// Payload for creating a new activity.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_time_order))]
pub struct CreateActivity {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub description: String,
    pub label: ActivityLabel,
    pub location: ActivityLocation,
    pub created_by: String,
}

/// Partial update payload. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActivity {
    pub title: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub label: Option<ActivityLabel>,
    pub location: Option<ActivityLocation>,
}

/// The edit workflow enforces strictly-after; the calendar core itself only
/// clamps and degrades if bad data slips through.
fn validate_time_order(payload: &CreateActivity) -> Result<(), ValidationError> {
    if payload.end_time <= payload.start_time {
        return Err(ValidationError::new("end_before_start")
            .with_message("end_time must be after start_time".into()));
    }
    Ok(())
}

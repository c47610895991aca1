// SPDX-License-Identifier: MIT

//! Holiday records: the internal shape and the remote feed shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday at day granularity. Read-only, sourced externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub is_national_holiday: bool,
}

/// One record in the remote holiday feed.
///
/// The feed is keyed by year then by `YYYY-MM-DD` date, but each record also
/// carries its own `dd-mm-yyyy` formatted date field, which is the one we
/// parse.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFeedRecord {
    pub holiday_name: String,
    /// `dd-mm-yyyy`
    pub holiday_date: String,
    #[serde(default)]
    pub is_national_holiday: bool,
}

impl HolidayFeedRecord {
    pub fn parse_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(&self.holiday_date, "%d-%m-%Y")
    }
}

// SPDX-License-Identifier: MIT

//! Holiday overlay lookup.
//!
//! `HolidayCalendar` is an explicit cache object: built once from the feed
//! (or the embedded fallback), queried per date, refreshed by the caller
//! when `is_expired` says so. There is no ambient global map.

use crate::models::Holiday;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Known national holidays for 2025, embedded so date styling never
/// silently disappears when the remote feed is unreachable.
const FALLBACK_YEAR: i32 = 2025;
const FALLBACK_HOLIDAYS: [(u32, u32, &str); 27] = [
    (1, 1, "Hari Tahun Baru"),
    (1, 27, "Isra Mikraj Nabi Muhammad"),
    (1, 28, "Cuti Bersama Tahun Baru Imlek"),
    (1, 29, "Tahun Baru Imlek"),
    (3, 28, "Cuti Bersama Hari Suci Nyepi (Tahun Baru Saka)"),
    (3, 29, "Hari Suci Nyepi (Tahun Baru Saka)"),
    (3, 31, "Hari Idul Fitri"),
    (4, 1, "Hari Idul Fitri"),
    (4, 2, "Cuti Bersama Idul Fitri"),
    (4, 3, "Cuti Bersama Idul Fitri"),
    (4, 4, "Cuti Bersama Idul Fitri"),
    (4, 7, "Cuti Bersama Idul Fitri"),
    (4, 18, "Wafat Isa Almasih"),
    (4, 20, "Hari Paskah"),
    (5, 1, "Hari Buruh Internasional / Pekerja"),
    (5, 12, "Hari Raya Waisak"),
    (5, 13, "Cuti Bersama Waisak"),
    (5, 29, "Kenaikan Isa Al Masih"),
    (5, 30, "Cuti Bersama Kenaikan Isa Al Masih"),
    (6, 1, "Hari Lahir Pancasila"),
    (6, 6, "Idul Adha (Lebaran Haji)"),
    (6, 9, "Idul Adha (Lebaran Haji)"),
    (6, 27, "Satu Muharam / Tahun Baru Hijriah"),
    (8, 17, "Hari Proklamasi Kemerdekaan R.I."),
    (9, 5, "Maulid Nabi Muhammad"),
    (12, 25, "Hari Raya Natal"),
    (12, 26, "Cuti Bersama Natal"),
];

/// The embedded fallback list.
pub fn fallback_holidays() -> Vec<Holiday> {
    FALLBACK_HOLIDAYS
        .iter()
        .map(|&(month, day, name)| Holiday {
            date: NaiveDate::from_ymd_opt(FALLBACK_YEAR, month, day)
                .expect("fallback table holds valid dates"),
            name: name.to_string(),
            is_national_holiday: true,
        })
        .collect()
}

/// Date-keyed holiday cache with an explicit expiry policy.
pub struct HolidayCalendar {
    by_date: HashMap<NaiveDate, Holiday>,
    loaded_at: Instant,
    ttl: Duration,
}

impl HolidayCalendar {
    /// Build from a holiday list. Later entries win on duplicate dates.
    pub fn new(holidays: Vec<Holiday>, ttl: Duration) -> Self {
        let by_date = holidays.into_iter().map(|h| (h.date, h)).collect();
        Self {
            by_date,
            loaded_at: Instant::now(),
            ttl,
        }
    }

    /// Build from the embedded fallback table alone. Never empty.
    pub fn with_fallback(ttl: Duration) -> Self {
        Self::new(fallback_holidays(), ttl)
    }

    /// Display name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.by_date.get(&date).map(|h| h.name.as_str())
    }

    /// Existence check over the same key space as `holiday_name`.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    /// All loaded holidays, sorted by date.
    pub fn holidays(&self) -> Vec<&Holiday> {
        let mut all: Vec<&Holiday> = self.by_date.values().collect();
        all.sort_by_key(|h| h.date);
        all
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// True once the cache has outlived its TTL and should be rebuilt from
    /// the feed.
    pub fn is_expired(&self) -> bool {
        self.loaded_at.elapsed() >= self.ttl
    }
}

/// Saturday/Sunday check. Purely calendrical, independent of the holiday
/// feed; callers combine the two additively for rest-day styling.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// SPDX-License-Identifier: MIT

//! Duration and date-range formatting for display.
//!
//! Display strings are Indonesian, matching the application's UI language.
//! The month/day name tables live here so the formatting stays deterministic
//! and independent of system locale data.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

// Monday-first, matching Weekday::num_days_from_monday.
const DAY_NAMES: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * 60;

const ZERO_DURATION: &str = "0 menit";

/// Localized month name, "Januari" through "Desember".
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Localized day-of-week name, "Senin" through "Minggu".
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// Whole minutes from `start` to `end`, clamped at zero.
///
/// The clamp is a deliberate floor: the UI must never show a negative
/// duration even if the caller has not yet enforced end-after-start.
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes().max(0)
}

/// Decompose total minutes into "N hari N jam N menit", omitting zero
/// components. Zero or negative input renders the fixed zero label.
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return ZERO_DURATION.to_string();
    }

    let days = minutes / MINUTES_PER_DAY;
    let hours = (minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let mins = minutes % MINUTES_PER_HOUR;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{} hari", days));
    }
    if hours > 0 {
        parts.push(format!("{} jam", hours));
    }
    if mins > 0 {
        parts.push(format!("{} menit", mins));
    }

    parts.join(" ")
}

/// "10 Maret 2025"
pub fn format_full_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date), date.year())
}

/// "Senin, 10 Maret 2025", the day-agenda heading.
pub fn format_day_and_date(date: NaiveDate) -> String {
    format!("{}, {}", day_name(date), format_full_date(date))
}

/// "Maret 2025", the calendar header.
pub fn format_month_and_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

/// "HH:MM"
pub fn format_time(at: NaiveDateTime) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

/// Compact display of a date range.
///
/// Same day: a single full date. Same month and year: "10–12 Maret 2025"
/// (en-dash, day numbers collapsed). Otherwise: two full dates joined by
/// an en-dash with spaces.
pub fn format_date_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let (s, e) = (start.date(), end.date());

    if s == e {
        return format_full_date(s);
    }

    if s.month() == e.month() && s.year() == e.year() {
        return format!("{}\u{2013}{}", s.day(), format_full_date(e));
    }

    format!("{} \u{2013} {}", format_full_date(s), format_full_date(e))
}

// SPDX-License-Identifier: MIT

//! Day-boundary and time-interval primitives.
//!
//! Everything here compares naive local wall-clock values; "day" means the
//! caller's local calendar day, never UTC.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// First instant of the given calendar day (00:00:00).
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of the given calendar day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::nanoseconds(1)
}

/// True if both instants fall on the same calendar day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Inclusive containment of an instant in `[start, end]`.
///
/// An inverted range (`end < start`) contains nothing; callers relying on
/// this get the degrade-to-start-day behavior the bucketing policy asks for.
pub fn contains(start: NaiveDateTime, end: NaiveDateTime, instant: NaiveDateTime) -> bool {
    start <= instant && instant <= end
}

/// True if the two inclusive ranges share at least one instant.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    contains(a_start, a_end, b_start)
        || contains(a_start, a_end, b_end)
        || (b_start <= a_start && b_end >= a_end)
}

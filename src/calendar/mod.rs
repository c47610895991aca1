// SPDX-License-Identifier: MIT

//! The calendar core: pure, synchronous functions over an in-memory
//! activity snapshot. No retained state, no side effects; safe to call
//! concurrently from any number of rendering passes.

pub mod band;
pub mod bucket;
pub mod format;
pub mod interval;

pub use band::{band_flags, is_band_end, is_band_middle, is_band_start, BandFlags};
pub use bucket::{activities_for_day, has_activities, DayIndex};
pub use format::{
    duration_minutes, format_date_range, format_day_and_date, format_duration,
    format_month_and_year, format_time,
};

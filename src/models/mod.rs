// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod holiday;

pub use activity::{Activity, ActivityLabel, ActivityLocation, CreateActivity, UpdateActivity};
pub use holiday::{Holiday, HolidayFeedRecord};

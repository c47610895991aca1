// SPDX-License-Identifier: MIT

//! Services module - external collaborators.

pub mod holiday_feed;

pub use holiday_feed::HolidayFeedClient;

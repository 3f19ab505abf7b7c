//! # Time Utilities
//!
//! Wall-clock helpers using chrono. The footer reads the year at render time; nothing
//! here caches.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local timezone of the rendering context.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// The current calendar year in the local timezone.
pub fn current_year() -> i32 {
    today_local().year()
}

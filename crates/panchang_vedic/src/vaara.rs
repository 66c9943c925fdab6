//! Vaara (weekday) of a civil date.

use chrono::{Datelike, NaiveDate};

/// 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

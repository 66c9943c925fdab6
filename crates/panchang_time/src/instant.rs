//! Conversions between UTC instants and Julian Dates.
//!
//! The engine's canonical instant is [`Instant`], a `chrono` UTC timestamp.
//! Julian Dates are only used internally by the ephemeris model.

use chrono::{DateTime, NaiveDate, Utc};

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// Absolute UTC timestamp with sub-second precision.
pub type Instant = DateTime<Utc>;

/// Julian Date (UTC axis) of an instant.
pub fn jd_utc(instant: &Instant) -> f64 {
    let seconds = instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Julian Date (TT axis) of an instant, applying ΔT.
pub fn jd_tt(instant: &Instant) -> f64 {
    let jd = jd_utc(instant);
    jd + delta_t_seconds(jd) / SECONDS_PER_DAY
}

/// Instant for a Julian Date on the UTC axis, rounded to the microsecond.
pub fn instant_from_jd_utc(jd: f64) -> Result<Instant, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(jd));
    }
    let micros = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1e6).round();
    if micros.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp_micros(micros as i64).ok_or(TimeError::OutOfRange(jd))
}

/// 00:00 UTC at the start of a Gregorian calendar date.
pub fn midnight_utc(year: i32, month: u32, day: u32) -> Result<Instant, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or(TimeError::InvalidCalendarDate { year, month, day })
}

//! Time primitives for the panchang engine.
//!
//! This crate provides:
//! - Julian Date <-> Gregorian calendar conversions
//! - ΔT (TT − UT) from piecewise polynomials
//! - Greenwich and local mean sidereal time
//! - The [`Instant`] type (UTC, sub-second) and its Julian Date conversions

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_seconds, delta_t_seconds_for_year};
pub use error::TimeError;
pub use instant::{Instant, instant_from_jd_utc, jd_tt, jd_utc, midnight_utc};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, decimal_year,
    jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};

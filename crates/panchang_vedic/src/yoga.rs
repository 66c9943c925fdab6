//! Yoga: the sum of Sun and Moon longitudes in 27 spans of 13°20'.

use panchang_frames::normalize_360;

use crate::nakshatra::NAKSHATRA_SPAN_27;

/// Yogas in the cycle.
pub const YOGA_COUNT: u8 = 27;

/// 0-based yoga index (0 = Vishkambha .. 26 = Vaidhriti).
pub fn yoga_index(sun_deg: f64, moon_deg: f64) -> u8 {
    ((normalize_360(sun_deg + moon_deg) / NAKSHATRA_SPAN_27).floor() as u8).min(YOGA_COUNT - 1)
}

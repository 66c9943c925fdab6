//! Nakshatra (lunar mansion), 27 equal divisions of 13°20'.

use panchang_frames::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Nakshatras in the 27-scheme.
pub const NAKSHATRA_COUNT: u8 = 27;

/// 0-based nakshatra index (0 = Ashwini .. 26 = Revati) of a longitude.
pub fn nakshatra_index(moon_deg: f64) -> u8 {
    ((normalize_360(moon_deg) / NAKSHATRA_SPAN_27).floor() as u8).min(NAKSHATRA_COUNT - 1)
}

//! Tithi (lunar day): each 12° of Moon-Sun elongation.
//!
//! Index 0..14 is the waxing half ending in Purnima (full moon), index
//! 15..29 the waning half ending in Amavasya (new moon).

use serde::{Deserialize, Serialize};

use panchang_frames::normalize_360;

/// Tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Elongation covered by one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Shukla paksha, new moon to full moon.
    Waxing,
    /// Krishna paksha, full moon to new moon.
    Waning,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waxing => "Shukla",
            Self::Waning => "Krishna",
        }
    }
}

/// 0-based tithi index (0..=29) from sidereal or tropical longitudes in
/// degrees. Both inputs may be any real angle.
pub fn tithi_index(sun_deg: f64, moon_deg: f64) -> u8 {
    let elongation = normalize_360(moon_deg - sun_deg);
    ((elongation / TITHI_SEGMENT_DEG).floor() as u8).min(TITHI_COUNT - 1)
}

/// Paksha of a 0-based tithi index.
pub fn paksha_for_tithi(index: u8) -> Paksha {
    if index < TITHI_COUNT / 2 {
        Paksha::Waxing
    } else {
        Paksha::Waning
    }
}

/// 1-based day within the paksha (1..=15).
pub fn tithi_in_paksha(index: u8) -> u8 {
    index % (TITHI_COUNT / 2) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_is_first_tithi() {
        assert_eq!(tithi_index(100.0, 100.0), 0);
        assert_eq!(tithi_index(100.0, 111.999), 0);
        assert_eq!(tithi_index(100.0, 112.0), 1);
    }

    #[test]
    fn elongation_wraps_through_zero() {
        // Moon 350, Sun 10: elongation 340 -> index 28
        assert_eq!(tithi_index(10.0, 350.0), 28);
        assert_eq!(tithi_index(350.0, 10.0), 1);
        assert_eq!(tithi_index(0.0, -0.5), 29);
    }

    #[test]
    fn full_moon_starts_waning_half() {
        assert_eq!(tithi_index(0.0, 180.0), 15);
        assert_eq!(paksha_for_tithi(14), Paksha::Waxing);
        assert_eq!(paksha_for_tithi(15), Paksha::Waning);
        assert_eq!(paksha_for_tithi(29), Paksha::Waning);
    }

    #[test]
    fn day_within_paksha() {
        assert_eq!(tithi_in_paksha(0), 1);
        assert_eq!(tithi_in_paksha(14), 15);
        assert_eq!(tithi_in_paksha(15), 1);
        assert_eq!(tithi_in_paksha(29), 15);
    }

    #[test]
    fn every_index_in_range() {
        for i in 0..3600 {
            let moon = i as f64 * 0.1;
            assert!(tithi_index(0.0, moon) < TITHI_COUNT);
        }
    }

    #[test]
    fn paksha_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Paksha::Waning).unwrap(), "\"Waning\"");
        assert_eq!(Paksha::Waxing.name(), "Shukla");
    }
}

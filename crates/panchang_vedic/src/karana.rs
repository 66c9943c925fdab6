//! Karana in the simplified cyclic mapping `tithi mod 11`.
//!
//! The traditional 60-half-tithi sequence (7 movable karanas repeating plus
//! 4 fixed ones) is not modeled; each tithi maps to one of 11 names.

/// Karana names in the cycle.
pub const KARANA_CYCLE: u8 = 11;

/// 0-based karana index (0..=10) for a 0-based tithi index.
pub fn karana_index(tithi_index: u8) -> u8 {
    tithi_index % KARANA_CYCLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_every_eleven_tithis() {
        assert_eq!(karana_index(0), 0);
        assert_eq!(karana_index(10), 10);
        assert_eq!(karana_index(11), 0);
        assert_eq!(karana_index(29), 7);
    }
}

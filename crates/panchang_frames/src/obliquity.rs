//! Mean obliquity of the ecliptic.

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries of TT since J2000.0. Meeus Eq. 22.2
/// (IAU 1980 polynomial), accurate to ~0.01" within a few centuries of J2000.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε0 = 23°26'27.407"
        let t = -0.127_296_372_348;
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((mean_obliquity_deg(t) - expected).abs() < 1e-6);
    }
}

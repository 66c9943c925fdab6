//! Low-precision nutation in longitude and obliquity.
//!
//! Four leading terms of the IAU 1980 series as given in Meeus,
//! *Astronomical Algorithms* 2nd ed., Chapter 22: accurate to 0.5" in Δψ and
//! 0.1" in Δε, far below what the panchang indices can resolve.

/// Nutation components in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ (arcsec).
    pub longitude_arcsec: f64,
    /// Nutation in obliquity Δε (arcsec).
    pub obliquity_arcsec: f64,
}

impl Nutation {
    /// Δψ in degrees.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_arcsec / 3600.0
    }

    /// Δε in degrees.
    pub fn obliquity_deg(&self) -> f64 {
        self.obliquity_arcsec / 3600.0
    }
}

/// Longitude of the Moon's mean ascending node Ω in degrees.
pub fn lunar_node_longitude_deg(t: f64) -> f64 {
    (125.044_52 - 1934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0)
        .rem_euclid(360.0)
}

/// Nutation at `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let omega = lunar_node_longitude_deg(t).to_radians();
    let sun_mean = (280.4665 + 36_000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481_267.8813 * t).to_radians();

    let longitude_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin()
        - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin();
    let obliquity_arcsec = 9.20 * omega.cos()
        + 0.57 * (2.0 * sun_mean).cos()
        + 0.10 * (2.0 * moon_mean).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude_arcsec,
        obliquity_arcsec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = -3.788", Δε = +9.443"
        let n = nutation(-0.127_296_372_348);
        assert!((n.longitude_arcsec - (-3.788)).abs() < 0.5, "Δψ = {}", n.longitude_arcsec);
        assert!((n.obliquity_arcsec - 9.443).abs() < 0.1, "Δε = {}", n.obliquity_arcsec);
    }

    #[test]
    fn amplitude_is_bounded() {
        for i in 0..200 {
            let n = nutation(-1.0 + i as f64 * 0.01);
            assert!(n.longitude_arcsec.abs() < 19.0);
            assert!(n.obliquity_arcsec.abs() < 10.5);
        }
    }

    #[test]
    fn node_in_range() {
        let om = lunar_node_longitude_deg(0.24);
        assert!((0.0..360.0).contains(&om));
    }
}

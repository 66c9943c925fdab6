//! Low-accuracy apparent position of the Sun.
//!
//! Meeus, *Astronomical Algorithms* 2nd ed., Chapter 25 (geometric mean
//! longitude + equation of center, aberration and nutation folded into a
//! single Ω term). Accuracy ~0.01 degrees, adequate for panchang indices
//! whose cells are 12 to 13.3 degrees wide.

use panchang_frames::{EquatorialCoords, ecliptic_to_equatorial, mean_obliquity_deg, normalize_360};

/// Apparent solar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Geometric (true) longitude, mean equinox of date, degrees.
    pub true_longitude_deg: f64,
    /// Apparent longitude (aberration + nutation), degrees.
    pub apparent_longitude_deg: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
    /// Apparent right ascension and declination.
    pub equatorial: EquatorialCoords,
}

/// Apparent Sun position at `t` Julian centuries of TT since J2000.0.
pub fn sun_position(t: f64) -> SunPosition {
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + center;
    let true_anomaly = (m + center).to_radians();
    let distance_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent_longitude = true_longitude - 0.005_69 - 0.004_78 * omega.sin();
    let obliquity = mean_obliquity_deg(t) + 0.002_56 * omega.cos();

    SunPosition {
        true_longitude_deg: normalize_360(true_longitude),
        apparent_longitude_deg: normalize_360(apparent_longitude),
        distance_au,
        equatorial: ecliptic_to_equatorial(apparent_longitude, 0.0, obliquity),
    }
}

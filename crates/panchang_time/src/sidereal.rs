//! Greenwich and local mean sidereal time.
//!
//! Meeus, *Astronomical Algorithms* 2nd ed., Eq. 12.4. Inputs are UT Julian
//! Dates; the engine treats UT1 as UTC (|UT1 − UTC| < 0.9 s).

use crate::julian::J2000_JD;

/// Greenwich mean sidereal time in degrees, range [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / 36_525.0;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local mean sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}

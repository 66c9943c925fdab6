//! Angle normalization and ecliptic -> equatorial conversion.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Equatorial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

/// Rotate ecliptic longitude/latitude into right ascension/declination.
///
/// `obliquity_deg` should be the true obliquity when the longitude already
/// includes nutation (apparent place). Meeus Eqs. 13.3 and 13.4.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> EquatorialCoords {
    let (sin_l, cos_l) = lon_deg.to_radians().sin_cos();
    let (sin_b, cos_b) = lat_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let y = sin_l * cos_e * cos_b - sin_b * sin_e;
    let x = cos_l * cos_b;
    let ra = y.atan2(x).to_degrees();
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).clamp(-1.0, 1.0).asin().to_degrees();

    EquatorialCoords {
        ra_deg: normalize_360(ra),
        dec_deg: dec,
    }
}

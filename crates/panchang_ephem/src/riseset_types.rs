//! Configuration and horizon geometry for rise/set searches.
//!
//! The target altitude `h0` is where the body's upper limb touches the
//! apparent horizon: refraction and semidiameter push it below the
//! geometric horizon, lunar parallax pulls it back up, and an elevated
//! observer sees a dipped horizon.

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equatorial Earth radius in km (used for horizontal parallax).
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.14;

/// IAU 2015 nominal solar radius in km.
pub const SUN_RADIUS_KM: f64 = 696_000.0;

/// Mean lunar radius in km.
pub const MOON_RADIUS_KM: f64 = 1_737.4;

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Whether to apply geometric dip correction for observer elevation.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
    /// Sampling step of the bracket search in minutes. Default: 10.0.
    ///
    /// Two crossings closer together than this can be missed; at 10 minutes
    /// that only happens for grazing events at extreme latitudes.
    pub coarse_step_minutes: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            altitude_correction: true,
            coarse_step_minutes: 10.0,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon in degrees for an observer `elevation_m`
    /// above sea level. Zero at or below sea level or when disabled.
    pub fn dip_deg(&self, elevation_m: f64) -> f64 {
        if self.altitude_correction && elevation_m > 0.0 {
            (2.0 * elevation_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        }
    }

    /// Target geocentric altitude of the Sun's center at rise/set, degrees.
    ///
    /// `h0 = -(refraction + semidiameter) - dip`
    pub fn sun_target_altitude_deg(&self, distance_au: f64, elevation_m: f64) -> f64 {
        let semidiameter = semidiameter_deg(SUN_RADIUS_KM, distance_au * AU_KM);
        -(self.refraction_arcmin / 60.0 + semidiameter) - self.dip_deg(elevation_m)
    }

    /// Target geocentric altitude of the Moon's center at rise/set, degrees.
    ///
    /// `h0 = parallax - refraction - semidiameter - dip`
    pub fn moon_target_altitude_deg(&self, distance_km: f64, elevation_m: f64) -> f64 {
        let parallax = horizontal_parallax_deg(distance_km);
        let semidiameter = semidiameter_deg(MOON_RADIUS_KM, distance_km);
        parallax - self.refraction_arcmin / 60.0 - semidiameter - self.dip_deg(elevation_m)
    }
}

/// Angular semidiameter in degrees of a sphere of `radius_km` seen from
/// `distance_km`.
pub fn semidiameter_deg(radius_km: f64, distance_km: f64) -> f64 {
    (radius_km / distance_km).clamp(-1.0, 1.0).asin().to_degrees()
}

/// Equatorial horizontal parallax in degrees of a body at `distance_km`.
pub fn horizontal_parallax_deg(distance_km: f64) -> f64 {
    semidiameter_deg(EARTH_EQUATORIAL_RADIUS_KM, distance_km)
}

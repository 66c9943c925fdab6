//! Analytic Sun/Moon ephemeris for the panchang engine.
//!
//! [`AnalyticEphemeris`] implements [`panchang_core::Ephemeris`] from closed
//! form series (Meeus chapters 25 and 47), so the engine runs without any
//! kernel files. Instants are moved onto the TT axis with a ΔT model;
//! sidereal time treats UT1 as UTC.
//!
//! Valid for TT dates in 1800-01-01 .. 2200-01-01. Outside that range every
//! query returns [`EphemerisError::OutOfRange`].

pub mod moon;
pub mod riseset;
pub mod riseset_types;
pub mod sun;

use panchang_core::{
    Body, Direction, Ephemeris, EphemerisError, EquatorialPosition, Instant, Observer,
};
use panchang_frames::{
    EquatorialCoords, ecliptic_to_equatorial, mean_obliquity_deg, nutation,
};
use panchang_time::{jd_to_centuries, jd_tt};

pub use moon::{MoonPosition, moon_position};
pub use riseset::altitude_deg;
pub use riseset_types::RiseSetConfig;
pub use sun::{SunPosition, sun_position};

/// First TT Julian Date served (1800-01-01 0h).
pub const MIN_JD_TT: f64 = 2_378_496.5;

/// End of the served TT range (2200-01-01 0h), exclusive.
pub const MAX_JD_TT: f64 = 2_524_593.5;

/// Geocentric ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Apparent ecliptic longitude in degrees, range [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Apparent equatorial place plus distance, the input to rise/set geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BodyState {
    pub equatorial: EquatorialCoords,
    pub ecliptic: EclipticPosition,
}

/// Closed-form Sun and Moon ephemeris.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    config: RiseSetConfig,
}

impl AnalyticEphemeris {
    /// Provider with the default rise/set parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider with custom rise/set parameters.
    pub fn with_config(config: RiseSetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiseSetConfig {
        &self.config
    }

    /// Apparent geocentric ecliptic longitude, latitude and distance of `body`.
    pub fn geocentric_ecliptic(
        &self,
        body: Body,
        instant: &Instant,
    ) -> Result<EclipticPosition, EphemerisError> {
        Ok(self.body_state(body, instant)?.ecliptic)
    }

    pub(crate) fn body_state(
        &self,
        body: Body,
        instant: &Instant,
    ) -> Result<BodyState, EphemerisError> {
        let jd = jd_tt(instant);
        if !(MIN_JD_TT..MAX_JD_TT).contains(&jd) {
            return Err(EphemerisError::OutOfRange { jd_tt: jd });
        }
        let t = jd_to_centuries(jd);
        match body {
            Body::Sun => {
                let sun = sun_position(t);
                Ok(BodyState {
                    equatorial: sun.equatorial,
                    ecliptic: EclipticPosition {
                        longitude_deg: sun.apparent_longitude_deg,
                        latitude_deg: 0.0,
                        distance_km: sun.distance_au * riseset_types::AU_KM,
                    },
                })
            }
            Body::Moon => {
                let moon = moon_position(t);
                let nut = nutation(t);
                let longitude = moon.apparent_longitude_deg(&nut);
                let obliquity = mean_obliquity_deg(t) + nut.obliquity_deg();
                Ok(BodyState {
                    equatorial: ecliptic_to_equatorial(longitude, moon.latitude_deg, obliquity),
                    ecliptic: EclipticPosition {
                        longitude_deg: longitude,
                        latitude_deg: moon.latitude_deg,
                        distance_km: moon.distance_km,
                    },
                })
            }
        }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn apparent_equatorial_position(
        &self,
        body: Body,
        instant: &Instant,
        _observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError> {
        let eq = self.body_state(body, instant)?.equatorial;
        Ok(EquatorialPosition {
            right_ascension_hours: eq.ra_deg / 15.0,
            declination_deg: eq.dec_deg,
        })
    }

    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        search_start: &Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        riseset::search(self, body, observer, direction, search_start, window_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn right_ascension_in_hours() {
        let eph = AnalyticEphemeris::new();
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
        for body in [Body::Sun, Body::Moon] {
            let p = eph
                .apparent_equatorial_position(body, &t, &Observer::at(0.0, 0.0))
                .unwrap();
            assert!((0.0..24.0).contains(&p.right_ascension_hours));
            assert!(p.declination_deg.abs() < 30.0);
        }
    }

    #[test]
    fn sun_longitude_near_280_on_new_year() {
        let eph = AnalyticEphemeris::new();
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let p = eph.geocentric_ecliptic(Body::Sun, &t).unwrap();
        assert!((p.longitude_deg - 280.0).abs() < 1.0, "λ☉ = {}", p.longitude_deg);
        assert!((p.distance_km / riseset_types::AU_KM - 0.9833).abs() < 0.001);
    }

    #[test]
    fn out_of_range_dates_are_rejected() {
        let eph = AnalyticEphemeris::new();
        let t = Utc.with_ymd_and_hms(1700, 6, 1, 0, 0, 0).unwrap();
        let err = eph
            .apparent_equatorial_position(Body::Moon, &t, &Observer::at(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, EphemerisError::OutOfRange { .. }));
    }

    #[test]
    fn custom_config_is_kept() {
        let config = RiseSetConfig {
            coarse_step_minutes: 5.0,
            ..Default::default()
        };
        assert_eq!(AnalyticEphemeris::with_config(config).config(), &config);
    }
}

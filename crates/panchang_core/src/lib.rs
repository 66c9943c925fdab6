//! Shared types and the ephemeris capability contract.
//!
//! The panchang engine never talks to an astronomy library directly. It
//! consumes the [`Ephemeris`] trait: apparent geocentric equatorial
//! positions plus a horizon-crossing search. Any model (analytic series,
//! JPL kernels, a test double) can sit behind it.

pub mod error;
pub mod search_util;

use serde::{Deserialize, Serialize};

pub use error::EphemerisError;
pub use panchang_time::Instant;
pub use search_util::{Crossing, bisect_root, bisect_transition, find_crossing};

/// Bodies the panchang needs positions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizon crossing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Rising,
    Setting,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rising => "rise",
            Self::Setting => "set",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geographic vantage point of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude: f64,
    /// Height above mean sea level in meters.
    #[serde(default)]
    pub elevation_meters: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, elevation_meters: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation_meters,
        }
    }

    /// Observer at sea level.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}

/// Apparent geocentric equatorial coordinates of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquatorialPosition {
    /// Right ascension in hours, range [0, 24).
    pub right_ascension_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub declination_deg: f64,
}

/// Capability interface every ephemeris provider must satisfy.
///
/// Implementations must be deterministic: identical inputs on the same
/// provider version give bit-identical outputs.
pub trait Ephemeris {
    /// Apparent geocentric equatorial position of `body` at `instant`.
    ///
    /// `observer` is passed through for providers that apply topocentric
    /// corrections; geocentric providers may ignore it.
    fn apparent_equatorial_position(
        &self,
        body: Body,
        instant: &Instant,
        observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError>;

    /// First instant within `window_days` after `search_start` at which
    /// `body` crosses the horizon in `direction`, or `None` if it never does.
    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        search_start: &Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn apparent_equatorial_position(
        &self,
        body: Body,
        instant: &Instant,
        observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError> {
        (**self).apparent_equatorial_position(body, instant, observer)
    }

    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        search_start: &Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        (**self).search_rise_set(body, observer, direction, search_start, window_days)
    }
}

//! Frame helpers for the panchang ephemeris.
//!
//! Provides the mean obliquity of the ecliptic, low-precision nutation, and
//! the ecliptic -> equatorial rotation used to produce apparent right
//! ascension and declination.

pub mod nutation;
pub mod obliquity;
pub mod spherical;

pub use nutation::{Nutation, lunar_node_longitude_deg, nutation};
pub use obliquity::mean_obliquity_deg;
pub use spherical::{EquatorialCoords, ecliptic_to_equatorial, normalize_360, normalize_pm180};

//! Longitude sampler.

use panchang_core::{Body, Ephemeris, EphemerisError, Instant, Observer};
use panchang_frames::normalize_360;

/// Longitude proxy of `body` in degrees, range [0, 360).
///
/// This is the apparent right ascension scaled from hours to degrees, not
/// the ecliptic longitude; the cycle indices are defined on this value.
/// A non-finite right ascension from the provider is an
/// [`EphemerisError::Provider`].
pub fn longitude_of<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    instant: &Instant,
    observer: &Observer,
) -> Result<f64, EphemerisError> {
    let position = ephemeris.apparent_equatorial_position(body, instant, observer)?;
    if !position.right_ascension_hours.is_finite() {
        return Err(EphemerisError::Provider(format!(
            "non-finite right ascension for {body} at {instant}: {}",
            position.right_ascension_hours
        )));
    }
    Ok(normalize_360(position.right_ascension_hours * 15.0))
}
